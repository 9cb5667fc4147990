use egui::{Color32, Pos2, Shape, Stroke, Vec2};

/// A wind bar: a thin rectangle pivoting about a point one sixth of its
/// height from the top, rotated to the wind direction and scaled by the
/// wind speed. Painted at half opacity, further scaled by `alpha`.
#[derive(Debug, Clone)]
pub struct Bar {
    width: f32,
    height: f32,
    length_scale: f32,
    pub angle: f32,
    pub alpha: f32,
}

impl Bar {
    pub fn new(length_scale: f32) -> Self {
        Self {
            width: 8.0,
            height: 40.0,
            length_scale,
            angle: 0.0,
            alpha: 1.0,
        }
    }

    pub fn set_length_scale(&mut self, length_scale: f32) {
        self.length_scale = length_scale;
    }

    pub fn paint(&self, painter: &egui::Painter, pivot: Pos2, color: Color32) {
        if self.alpha <= 0.0 {
            return;
        }

        let top = -self.height / 6.0;
        let bottom = top + self.height * self.length_scale;
        let half = self.width / 2.0;
        let corners = [
            Vec2::new(-half, top),
            Vec2::new(half, top),
            Vec2::new(half, bottom),
            Vec2::new(-half, bottom),
        ];

        let (sin, cos) = self.angle.sin_cos();
        let points = corners
            .iter()
            .map(|c| pivot + Vec2::new(c.x * cos - c.y * sin, c.x * sin + c.y * cos))
            .collect();

        let fill = color.gamma_multiply(0.5 * self.alpha);
        painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
    }
}
