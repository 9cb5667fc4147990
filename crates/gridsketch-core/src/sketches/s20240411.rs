use egui::Vec2;

use super::{FrameCtx, Furniture, Sketch};
use crate::animation::Timeline;
use crate::context::SketchContext;
use crate::grid::{AnchorId, GridAlign, GridView};
use crate::views::RandomTitleOneLine;

const LINES: &[&str] = &[
    "EVERY GLYPH BEGINS AS NOISE",
    "A CURSOR SWEEPS LEFT TO RIGHT",
    "WHAT IT PASSES BECOMES TRUE",
    "WHAT IT HASN'T KEEPS GUESSING",
    "UNTIL THE LAST CHARACTER SETTLES",
    "AND THE LINE GOES QUIET",
];

/// 20240411 — the type-on effect as the subject itself: a column of
/// lines starting their reveal one after another.
pub struct TypeOnTitles {
    ctx: SketchContext,
    furniture: Option<Furniture>,
    timeline: Timeline,
    lines: Vec<(AnchorId, RandomTitleOneLine)>,
}

impl TypeOnTitles {
    pub fn new() -> Self {
        Self {
            ctx: SketchContext {
                code: "DESIGN SKETCH 20240411".into(),
                tech_title: "type-on text reveal".into(),
                title: "Letters before they settle".into(),
                ..SketchContext::default()
            },
            furniture: None,
            timeline: Timeline::new(),
            lines: Vec::new(),
        }
    }
}

impl Sketch for TypeOnTitles {
    fn context(&self) -> &SketchContext {
        &self.ctx
    }

    fn setup(&mut self, grid: &mut GridView) {
        self.furniture = Some(Furniture::attach(&self.ctx, grid));

        let color = self.ctx.title_color();
        for (i, text) in LINES.iter().enumerate() {
            let id = grid.add_anchor(2, 5 + i as i32 * 3, GridAlign::TopLeft, Vec2::ZERO);
            self.lines
                .push((id, RandomTitleOneLine::new(*text, 24.0, color, 0.25)));
            self.timeline.cue(i as f32 * 1.5, i as u32);
        }
    }

    fn update(&mut self, frame: &mut FrameCtx<'_>) {
        if let Some(furniture) = &mut self.furniture {
            furniture.update(frame);
        }

        for tag in self.timeline.tick(frame.dt) {
            if let Some((_, line)) = self.lines.get_mut(tag as usize) {
                line.start();
            }
        }

        for (id, line) in &mut self.lines {
            line.update(frame.dt);
            frame.grid.set_anchor_size(*id, line.measure(frame.painter));
            if let Some(pos) = frame.grid.position(*id) {
                line.paint(frame.painter, frame.to_screen(pos));
            }
        }
    }
}
