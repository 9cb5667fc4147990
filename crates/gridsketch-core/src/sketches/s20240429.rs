use super::{FrameCtx, Furniture, Sketch};
use crate::context::SketchContext;
use crate::grid::{position_by_grid, GridView};
use crate::utils::math;
use crate::views::Disk;

const NOISE_FREQUENCY: f32 = 0.45;
const NOISE_DRIFT: f32 = 0.25;
const AMPLITUDE: f32 = 1.5 * std::f32::consts::PI;

/// 20240429 — a lattice of needle disks easing toward a slowly
/// drifting noise field.
pub struct NeedleField {
    ctx: SketchContext,
    furniture: Option<Furniture>,
    disks: Vec<(i32, i32, Disk)>,
}

impl NeedleField {
    pub fn new() -> Self {
        Self {
            ctx: SketchContext {
                code: "DESIGN SKETCH 20240429".into(),
                tech_title: "value noise over a lattice".into(),
                title: "A field of patient needles".into(),
                ..SketchContext::default()
            },
            furniture: None,
            disks: Vec::new(),
        }
    }
}

impl Sketch for NeedleField {
    fn context(&self) -> &SketchContext {
        &self.ctx
    }

    fn setup(&mut self, grid: &mut GridView) {
        self.furniture = Some(Furniture::attach(&self.ctx, grid));

        let right = grid.division_x() as i32 - 2;
        let bottom = grid.division_y() as i32 - 3;
        for gx in (3..=right).step_by(2) {
            for gy in (4..=bottom).step_by(2) {
                self.disks.push((gx, gy, Disk::new(16.0)));
            }
        }
        log::debug!("needle field with {} disks", self.disks.len());
    }

    fn update(&mut self, frame: &mut FrameCtx<'_>) {
        if let Some(furniture) = &mut self.furniture {
            furniture.update(frame);
        }

        let t = frame.elapsed as f32;
        for (gx, gy, disk) in &mut self.disks {
            let target = math::noise2(
                *gx as f32 * NOISE_FREQUENCY + t * NOISE_DRIFT,
                *gy as f32 * NOISE_FREQUENCY,
            ) * AMPLITUDE;
            disk.ease_toward(target);

            let pos = position_by_grid(*gx as f32, *gy as f32, frame.grid);
            disk.paint(frame.painter, frame.to_screen(pos), self.ctx.title_color());
        }
    }
}
