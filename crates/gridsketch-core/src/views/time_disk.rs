use egui::{Align2, Color32, FontId, Pos2};

/// A filled disk stamped with the time it was spawned, used as the
/// visual for the falling bodies.
#[derive(Debug, Clone)]
pub struct TimeDisk {
    radius: f32,
    font_size: f32,
    label: String,
}

impl TimeDisk {
    pub fn new(radius: f32, font_size: f32) -> Self {
        Self {
            radius,
            font_size,
            label: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// `angle` spins the label offset around the center so rolling
    /// bodies visibly rotate.
    pub fn paint(
        &self,
        painter: &egui::Painter,
        center: Pos2,
        angle: f32,
        fill: Color32,
        text: Color32,
    ) {
        painter.circle_filled(center, self.radius, fill);
        let offset = self.radius - self.font_size * 0.75;
        let label_pos = center + egui::Vec2::angled(angle + std::f32::consts::PI) * offset;
        painter.text(
            label_pos,
            Align2::LEFT_CENTER,
            &self.label,
            FontId::proportional(self.font_size),
            text,
        );
    }
}
