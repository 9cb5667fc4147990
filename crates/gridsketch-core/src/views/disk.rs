use egui::{Color32, Pos2, Stroke, Vec2};

const NEEDLE_COLOR: Color32 = Color32::from_rgb(0x37, 0xbb, 0xe4);

/// A faint circle with a radial needle pointing at `rotation`
/// (0 = straight up, clockwise positive).
#[derive(Debug, Clone)]
pub struct Disk {
    radius: f32,
    pub rotation: f32,
}

impl Disk {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            rotation: 0.0,
        }
    }

    /// Eases the needle toward `target` by a twentieth of the remaining
    /// arc per frame, taking the short way around.
    pub fn ease_toward(&mut self, target: f32) {
        self.rotation = crate::utils::math::ease_angle(self.rotation, target, 0.05);
    }

    pub fn paint(&self, painter: &egui::Painter, center: Pos2, color: Color32) {
        painter.circle_stroke(
            center,
            self.radius,
            Stroke::new(1.0, color.gamma_multiply(0.2)),
        );
        let tip = center + Vec2::new(self.rotation.sin(), -self.rotation.cos()) * self.radius;
        painter.line_segment([center, tip], Stroke::new(2.0, NEEDLE_COLOR));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_takes_the_short_way_around() {
        let mut disk = Disk::new(16.0);
        disk.rotation = 0.1;
        disk.ease_toward(std::f32::consts::TAU - 0.1);
        // target is just behind zero, so the needle should move backwards
        assert!(disk.rotation < 0.1);
    }

    #[test]
    fn ease_converges_on_target() {
        let mut disk = Disk::new(16.0);
        for _ in 0..400 {
            disk.ease_toward(1.0);
        }
        assert!((disk.rotation - 1.0).abs() < 1e-3);
    }
}
