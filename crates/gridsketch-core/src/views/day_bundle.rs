use egui::{Color32, Pos2};

use super::Bar;
use crate::animation::Fade;
use crate::utils::math;

/// One observed wind reading, already reduced to what the bars need.
#[derive(Debug, Clone, Copy)]
pub struct WindSample {
    pub direction_deg: f32,
    pub speed: f32,
}

/// A day's wind readings as a star of bars sharing one pivot: each bar
/// takes the reading's direction, scales with its speed, and fades in
/// staggered 0.4 s apart after a per-bundle delay.
#[derive(Debug)]
pub struct DayBundle {
    bars: Vec<Bar>,
    fades: Vec<Fade>,
    elapsed: f32,
}

impl DayBundle {
    pub fn new(samples: &[WindSample], delay: f32) -> Self {
        let mut bars = Vec::with_capacity(samples.len());
        let mut fades = Vec::with_capacity(samples.len());
        for (i, sample) in samples.iter().enumerate() {
            let mut bar = Bar::new(math::scale(sample.speed, 0.0, 5.0, 0.5, 1.0));
            bar.angle = math::deg_to_rad(sample.direction_deg);
            bar.alpha = 0.0;
            bars.push(bar);
            fades.push(Fade::new(delay + i as f32 * 0.4, 1.0, 0.0, 1.0));
        }
        Self {
            bars,
            fades,
            elapsed: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        for (bar, fade) in self.bars.iter_mut().zip(&self.fades) {
            bar.alpha = fade.value(self.elapsed);
        }
    }

    pub fn paint(&self, painter: &egui::Painter, pivot: Pos2, color: Color32) {
        for bar in &self.bars {
            bar.paint(painter, pivot, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_fade_in_staggered() {
        let samples = [
            WindSample {
                direction_deg: 0.0,
                speed: 2.0,
            },
            WindSample {
                direction_deg: 90.0,
                speed: 4.0,
            },
        ];
        let mut bundle = DayBundle::new(&samples, 0.0);
        bundle.update(0.5);
        // first bar is halfway through its fade, second barely started
        assert!((bundle.bars[0].alpha - 0.5).abs() < 1e-3);
        assert!(bundle.bars[1].alpha < 0.2);
        bundle.update(2.0);
        assert_eq!(bundle.bars[0].alpha, 1.0);
        assert_eq!(bundle.bars[1].alpha, 1.0);
    }
}
