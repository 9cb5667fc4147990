use egui::{Color32, Pos2, Vec2};

use super::text_galley;

/// Seconds elapsed since the sketch started, next to its start time.
#[derive(Debug)]
pub struct TimeIndicator {
    font_size: f32,
    color: Color32,
    started_at: String,
    elapsed: f64,
}

impl TimeIndicator {
    pub fn new(font_size: f32, color: Color32) -> Self {
        Self {
            font_size,
            color,
            started_at: chrono::Local::now().format("%H:%M:%S").to_string(),
            elapsed: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt as f64;
    }

    fn disp(&self) -> String {
        format!("{} +{:09.2}", self.started_at, self.elapsed)
    }

    pub fn measure(&self, painter: &egui::Painter) -> Vec2 {
        text_galley(painter, self.disp(), self.font_size, self.color, 1.0).size()
    }

    pub fn paint(&self, painter: &egui::Painter, pos: Pos2) {
        let galley = text_galley(painter, self.disp(), self.font_size, self.color, 1.0);
        painter.galley(pos, galley, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_accumulates_frame_deltas() {
        let mut indicator = TimeIndicator::new(14.0, Color32::BLACK);
        for _ in 0..60 {
            indicator.update(1.0 / 60.0);
        }
        assert!((indicator.elapsed - 1.0).abs() < 1e-3);
        assert!(indicator.disp().ends_with("000001.00"));
    }
}
