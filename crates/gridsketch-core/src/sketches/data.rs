use serde::Deserialize;

use super::SketchError;
use crate::views::City;

/// One hourly observation from the wind dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRecord {
    pub datetime: String,
    pub wind_speed: f32,
    pub wind_direction: String,
    pub wind_direction_angle: f32,
}

/// Wind observations for the wind sketches, checked into the repo.
pub fn load_weather() -> Result<Vec<WeatherRecord>, SketchError> {
    Ok(serde_json::from_str(include_str!(
        "../../assets/weather.json"
    ))?)
}

/// City coordinates and populations for the globe sketch.
pub fn load_cities() -> Result<Vec<City>, SketchError> {
    Ok(serde_json::from_str(include_str!(
        "../../assets/cities.json"
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_dataset_parses_and_is_plausible() {
        let records = load_weather().unwrap();
        assert!(!records.is_empty());
        for record in &records {
            assert!((0.0..360.0).contains(&record.wind_direction_angle));
            assert!(record.wind_speed >= 0.0);
        }
    }

    #[test]
    fn city_dataset_parses_and_is_plausible() {
        let cities = load_cities().unwrap();
        assert!(cities.len() >= 20);
        for city in &cities {
            assert!((-90.0..=90.0).contains(&city.lat));
            assert!((-180.0..=180.0).contains(&city.lon));
            assert!(city.population > 0.0);
        }
    }
}
