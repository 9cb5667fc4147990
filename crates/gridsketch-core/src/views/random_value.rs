use egui::{Color32, Pos2, Vec2};

use super::RandomTitleOneLine;
use crate::utils::{math, time};

/// A timestamp line over a 16-digit random value, both revealed with
/// the type-on effect. Empty until `populate` is called.
#[derive(Debug)]
pub struct RandomValueContainer {
    gap: f32,
    pub alpha: f32,
    timestamp: Option<RandomTitleOneLine>,
    value: Option<RandomTitleOneLine>,
}

impl RandomValueContainer {
    pub fn new(gap: f32) -> Self {
        Self {
            gap,
            alpha: 1.0,
            timestamp: None,
            value: None,
        }
    }

    pub fn is_populated(&self) -> bool {
        self.value.is_some()
    }

    /// Fills the container with a fresh timestamp and random value and
    /// starts their reveal.
    pub fn populate(&mut self) {
        let mut timestamp = RandomTitleOneLine::new(
            time::timestamp(),
            12.0,
            Color32::from_rgb(0x66, 0x66, 0x66),
            0.4,
        );
        timestamp.start();
        self.timestamp = Some(timestamp);

        let mut value = RandomTitleOneLine::new(math::random_digits16(), 24.0, Color32::BLACK, 0.25);
        value.start();
        self.value = Some(value);
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(timestamp) = &mut self.timestamp {
            timestamp.update(dt);
        }
        if let Some(value) = &mut self.value {
            value.update(dt);
        }
    }

    pub fn measure(&self, painter: &egui::Painter) -> Vec2 {
        let ts = self
            .timestamp
            .as_ref()
            .map(|t| t.measure(painter))
            .unwrap_or(Vec2::ZERO);
        let val = self
            .value
            .as_ref()
            .map(|v| v.measure(painter))
            .unwrap_or(Vec2::ZERO);
        Vec2::new(ts.x.max(val.x), self.gap + val.y)
    }

    pub fn paint(&mut self, painter: &egui::Painter, pos: Pos2) {
        if let Some(timestamp) = &mut self.timestamp {
            timestamp.alpha = self.alpha;
            timestamp.paint(painter, pos);
        }
        if let Some(value) = &mut self.value {
            value.alpha = self.alpha;
            value.paint(painter, pos + Vec2::new(0.0, self.gap));
        }
    }
}
