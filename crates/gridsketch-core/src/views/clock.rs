use chrono::Timelike;
use egui::{Color32, Pos2, Vec2};

use super::text_galley;

/// Wall-clock readout, `YYYY-MM-DD HH:MM:SS.mmm`, refreshed every frame.
#[derive(Debug)]
pub struct Clock {
    font_size: f32,
    color: Color32,
    disp: String,
}

impl Clock {
    pub fn new(font_size: f32, color: Color32) -> Self {
        Self {
            font_size,
            color,
            disp: String::new(),
        }
    }

    pub fn update(&mut self) {
        let now = chrono::Local::now();
        self.disp = format!(
            "{}.{:03}",
            now.format("%Y-%m-%d %H:%M:%S"),
            now.nanosecond() / 1_000_000
        );
    }

    pub fn measure(&self, painter: &egui::Painter) -> Vec2 {
        text_galley(painter, self.disp.clone(), self.font_size, self.color, 1.0).size()
    }

    pub fn paint(&self, painter: &egui::Painter, pos: Pos2) {
        let galley = text_galley(painter, self.disp.clone(), self.font_size, self.color, 1.0);
        painter.galley(pos, galley, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_formats_a_full_timestamp() {
        let mut clock = Clock::new(14.0, Color32::BLACK);
        clock.update();
        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(clock.disp.len(), 23);
        assert_eq!(&clock.disp[10..11], " ");
        assert_eq!(&clock.disp[19..20], ".");
    }
}
