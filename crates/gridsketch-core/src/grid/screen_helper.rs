use egui::{Color32, Pos2, Stroke};

use super::GridView;

/// Strokes the layout grid over the stage: `division_y + 1` horizontal
/// lines and `division_x + 1` vertical lines, width 1, at half opacity.
/// Debug overlay only; `origin` is the stage's top-left in screen space.
pub fn draw_layout_grid(painter: &egui::Painter, origin: Pos2, grid: &GridView, color: Color32) {
    let stroke = Stroke::new(1.0, color.gamma_multiply(0.5));

    for i in 0..=grid.division_y() {
        let y = origin.y + grid.unit_height() * i as f32;
        painter.line_segment(
            [
                Pos2::new(origin.x, y),
                Pos2::new(origin.x + grid.stage_width(), y),
            ],
            stroke,
        );
    }

    for i in 0..=grid.division_x() {
        let x = origin.x + grid.unit_width() * i as f32;
        painter.line_segment(
            [
                Pos2::new(x, origin.y),
                Pos2::new(x, origin.y + grid.stage_height()),
            ],
            stroke,
        );
    }
}

/// Stage-local position of a grid coordinate, without any alignment applied.
pub fn position_by_grid(unit_x: f32, unit_y: f32, grid: &GridView) -> Pos2 {
    Pos2::new(unit_x * grid.unit_width(), unit_y * grid.unit_height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_by_grid_scales_by_unit_size() {
        let grid = GridView::new(640.0, 480.0, 10, 8).unwrap();
        let pos = position_by_grid(2.0, 3.0, &grid);
        assert_eq!(pos, Pos2::new(128.0, 180.0));
    }
}
