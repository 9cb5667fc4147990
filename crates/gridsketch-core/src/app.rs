use std::time::Instant;

use egui::{Align2, Color32, FontId, Rect, Vec2};

use crate::grid::{draw_layout_grid, GridError, GridView};
use crate::sketches::{FrameCtx, Sketch};

const GRID_COLOR: Color32 = Color32::from_rgb(0x66, 0xaa, 0xff);

/// Hosts one sketch: owns the grid, aspect-fits the stage into the
/// window every frame, and drives the sketch from the eframe ticker.
pub struct SketchApp {
    grid: GridView,
    sketch: Box<dyn Sketch>,
    show_grid: bool,
    is_set_up: bool,
    elapsed: f64,
    frame_ms: f32,
}

impl SketchApp {
    pub fn new(sketch: Box<dyn Sketch>) -> Result<Self, GridError> {
        let ctx = sketch.context();
        let grid = GridView::new(640.0, 640.0, ctx.grid_divisions_x, ctx.grid_divisions_y)?;
        Ok(Self {
            grid,
            sketch,
            show_grid: true,
            is_set_up: false,
            elapsed: 0.0,
            frame_ms: 0.0,
        })
    }

    /// Aspect-fits the stage into the available area, honoring the
    /// sketch's margin: width-limited unless the height runs out first.
    fn fit_stage(&self, available: Rect) -> Rect {
        let ctx = self.sketch.context();
        let window_width = (available.width() - ctx.margin * 2.0).max(1.0);
        let window_height = (available.height() - ctx.margin * 2.0).max(1.0);

        let mut width = window_width;
        let mut height = window_width / ctx.stage_aspect;
        if height > window_height {
            height = window_height;
            width = window_height * ctx.stage_aspect;
        }
        Rect::from_center_size(available.center(), Vec2::new(width, height))
    }

    fn resize_grid(&mut self, stage: Rect) {
        if (self.grid.stage_width() - stage.width()).abs() > 0.5 {
            if let Err(err) = self.grid.set_stage_width(stage.width()) {
                log::warn!("stage width rejected: {err}");
            }
        }
        if (self.grid.stage_height() - stage.height()).abs() > 0.5 {
            if let Err(err) = self.grid.set_stage_height(stage.height()) {
                log::warn!("stage height rejected: {err}");
            }
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.elapsed += dt as f64;

        if ctx.input(|i| i.key_pressed(egui::Key::G)) {
            self.show_grid = !self.show_grid;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::WHITE))
            .show(ctx, |ui| {
                let stage = self.fit_stage(ui.max_rect());
                self.resize_grid(stage);

                if !self.is_set_up {
                    self.sketch.setup(&mut self.grid);
                    self.grid.update_anchor_positions();
                    self.is_set_up = true;
                    log::info!("{} ready", self.sketch.context().code);
                }

                let painter = ui.painter_at(stage.expand(self.sketch.context().margin));
                if self.show_grid {
                    // background overlay sits at quarter strength
                    draw_layout_grid(
                        &painter,
                        stage.min,
                        &self.grid,
                        GRID_COLOR.gamma_multiply(0.25),
                    );
                }

                let started = Instant::now();
                let mut frame_ctx = FrameCtx {
                    painter: &painter,
                    stage,
                    grid: &mut self.grid,
                    dt,
                    elapsed: self.elapsed,
                };
                self.sketch.update(&mut frame_ctx);
                self.frame_ms = started.elapsed().as_secs_f32() * 1000.0;

                if self.show_grid {
                    painter.text(
                        stage.min,
                        Align2::LEFT_BOTTOM,
                        format!("{:5.2} ms", self.frame_ms),
                        FontId::monospace(10.0),
                        Color32::GRAY,
                    );
                }
            });

        // keep the ticker running even without input events
        ctx.request_repaint();
    }
}
