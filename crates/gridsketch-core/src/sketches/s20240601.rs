use super::data;
use super::{FrameCtx, Furniture, Sketch, SketchError};
use crate::context::SketchContext;
use crate::grid::GridView;
use crate::views::Globe;

const SPIN_RAD_PER_SEC: f32 = 0.15;

/// 20240601 — the world's largest cities as a slowly turning
/// point-cloud globe.
pub struct CityLights {
    ctx: SketchContext,
    furniture: Option<Furniture>,
    globe: Globe,
}

impl CityLights {
    pub fn new() -> Result<Self, SketchError> {
        let cities = data::load_cities()?;
        log::info!("globe carries {} cities", cities.len());
        Ok(Self {
            ctx: SketchContext {
                code: "DESIGN SKETCH 20240601".into(),
                tech_title: "an orthographic point cloud".into(),
                title: "City lights from a long way out".into(),
                ..SketchContext::default()
            },
            furniture: None,
            globe: Globe::new(cities, SPIN_RAD_PER_SEC),
        })
    }
}

impl Sketch for CityLights {
    fn context(&self) -> &SketchContext {
        &self.ctx
    }

    fn setup(&mut self, grid: &mut GridView) {
        self.furniture = Some(Furniture::attach(&self.ctx, grid));
    }

    fn update(&mut self, frame: &mut FrameCtx<'_>) {
        if let Some(furniture) = &mut self.furniture {
            furniture.update(frame);
        }

        self.globe.update(frame.dt);
        let radius = frame.stage.height() * 0.35;
        self.globe.paint(
            frame.painter,
            frame.stage.center(),
            radius,
            self.ctx.title_color(),
        );
    }
}
