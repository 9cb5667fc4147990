use egui::{Color32, Pos2, Stroke, Vec2};
use nalgebra::{Rotation3, Vector3};
use serde::Deserialize;

use crate::utils::math;

/// A city point on the globe, straight out of the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f32,
    pub lon: f32,
    pub population: f64,
}

impl City {
    /// Unit vector on the sphere for this city's coordinates
    /// (y up, lat/lon in degrees).
    fn unit(&self) -> Vector3<f32> {
        let lat = math::deg_to_rad(self.lat);
        let lon = math::deg_to_rad(self.lon);
        Vector3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin())
    }
}

/// Orthographic point-cloud globe: cities on the front hemisphere are
/// drawn as dots weighted by population, fading toward the limb.
#[derive(Debug)]
pub struct Globe {
    cities: Vec<City>,
    spin: f32,
    pub rotation: f32,
}

impl Globe {
    pub fn new(cities: Vec<City>, spin: f32) -> Self {
        Self {
            cities,
            spin,
            rotation: 0.0,
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn update(&mut self, dt: f32) {
        self.rotation += self.spin * dt;
    }

    pub fn paint(&self, painter: &egui::Painter, center: Pos2, radius: f32, color: Color32) {
        painter.circle_stroke(center, radius, Stroke::new(1.0, color.gamma_multiply(0.2)));

        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), self.rotation);
        for city in &self.cities {
            let p = rotation * city.unit();
            if p.z <= 0.0 {
                continue;
            }
            let screen = center + Vec2::new(p.x, -p.y) * radius;
            let dot = math::scale(city.population as f32, 0.0, 4.0e7, 1.0, 4.0);
            painter.circle_filled(screen, dot, color.gamma_multiply(0.3 + 0.7 * p.z));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_unit_vectors_lie_on_the_sphere() {
        let city = City {
            name: "Tokyo".into(),
            lat: 35.69,
            lon: 139.69,
            population: 37_400_000.0,
        };
        let unit = city.unit();
        assert!((unit.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn equator_prime_meridian_points_along_x() {
        let city = City {
            name: "Null Island".into(),
            lat: 0.0,
            lon: 0.0,
            population: 0.0,
        };
        let unit = city.unit();
        assert!((unit.x - 1.0).abs() < 1e-6);
        assert!(unit.y.abs() < 1e-6);
        assert!(unit.z.abs() < 1e-6);
    }
}
