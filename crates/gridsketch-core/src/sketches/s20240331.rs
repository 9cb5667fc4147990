use egui::Vec2;

use super::{FrameCtx, Furniture, Sketch};
use crate::animation::{Fade, Timeline};
use crate::context::SketchContext;
use crate::grid::{AnchorId, GridAlign, GridView};
use crate::views::RandomValueContainer;

const COLS: usize = 3;
const ROWS: usize = 6;
const CELL_SPAN_X: i32 = 10;
const CELL_SPAN_Y: i32 = 4;
const MARGIN_X: i32 = 1;
const MARGIN_Y: i32 = 3;

/// Timeline tag for the end-of-cycle restart; cell tags are indices.
const TAG_RESTART: u32 = u32::MAX;

struct Cell {
    id: AnchorId,
    view: RandomValueContainer,
    fade: Fade,
}

/// 20240331 — a field of freshly drawn random numbers, revealed one per
/// second, swept away, and drawn again.
pub struct RandomNumbers {
    ctx: SketchContext,
    furniture: Option<Furniture>,
    timeline: Timeline,
    cells: Vec<Cell>,
}

impl RandomNumbers {
    pub fn new() -> Self {
        Self {
            ctx: SketchContext {
                code: "DESIGN SKETCH 20240331".into(),
                tech_title: "rand thread-local entropy".into(),
                title: "A few things about random numbers".into(),
                ..SketchContext::default()
            },
            furniture: None,
            timeline: Timeline::new(),
            cells: Vec::new(),
        }
    }

    fn build_cycle(&mut self, grid: &mut GridView) {
        for cell in self.cells.drain(..) {
            grid.remove_anchor(cell.id);
        }

        let count = COLS * ROWS;
        let populate_done = count as f32;
        // fade sweep starts after the last reveal plus a beat
        let fade_base = populate_done + 3.0;

        self.timeline = Timeline::new();
        for c in 0..COLS {
            for r in 0..ROWS {
                let index = c * ROWS + r;
                let id = grid.add_anchor(
                    MARGIN_X + c as i32 * CELL_SPAN_X,
                    MARGIN_Y + r as i32 * CELL_SPAN_Y,
                    GridAlign::TopLeft,
                    Vec2::ZERO,
                );
                self.timeline.cue((index + 1) as f32, index as u32);
                self.cells.push(Cell {
                    id,
                    view: RandomValueContainer::new(grid.unit_height() / 2.0),
                    fade: Fade::new(fade_base + index as f32 * 0.4, 0.5, 1.0, 0.0),
                });
            }
        }
        let last_fade = fade_base + (count - 1) as f32 * 0.4 + 0.5;
        self.timeline.cue(last_fade + 1.0, TAG_RESTART);
        grid.update_anchor_positions();
    }
}

impl Sketch for RandomNumbers {
    fn context(&self) -> &SketchContext {
        &self.ctx
    }

    fn setup(&mut self, grid: &mut GridView) {
        self.furniture = Some(Furniture::attach(&self.ctx, grid));
        self.build_cycle(grid);
    }

    fn update(&mut self, frame: &mut FrameCtx<'_>) {
        if let Some(furniture) = &mut self.furniture {
            furniture.update(frame);
        }

        let mut restart = false;
        for tag in self.timeline.tick(frame.dt) {
            if tag == TAG_RESTART {
                restart = true;
            } else if let Some(cell) = self.cells.get_mut(tag as usize) {
                cell.view.populate();
            }
        }
        if restart {
            log::debug!("random number cycle complete, restarting");
            self.build_cycle(frame.grid);
        }

        let elapsed = self.timeline.elapsed();
        for cell in &mut self.cells {
            cell.view.update(frame.dt);
            cell.view.alpha = cell.fade.value(elapsed);
            if cell.view.is_populated() {
                let size = cell.view.measure(frame.painter);
                frame.grid.set_anchor_size(cell.id, size);
            }
            if let Some(pos) = frame.grid.position(cell.id) {
                cell.view.paint(frame.painter, frame.to_screen(pos));
            }
        }
    }
}
