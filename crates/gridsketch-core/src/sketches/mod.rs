use egui::{Pos2, Rect, Vec2};
use thiserror::Error;

use crate::context::SketchContext;
use crate::grid::{AnchorId, GridAlign, GridView};
use crate::views::{Clock, RandomTitleOneLine, TimeIndicator};

pub mod data;

mod s20240331;
mod s20240408;
mod s20240411;
mod s20240429;
mod s20240504;
mod s20240525;
mod s20240601;

/// The dated sketches, oldest first.
pub const AVAILABLE: &[&str] = &[
    "20240331", "20240408", "20240411", "20240429", "20240504", "20240525", "20240601",
];

pub const LATEST: &str = "20240601";

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("unknown sketch date: {0}")]
    UnknownDate(String),
    #[error("sketch data: {0}")]
    Data(#[from] serde_json::Error),
}

/// Everything a sketch gets to work with for one frame. Positions from
/// the grid are stage-local; painting adds `stage.min`.
pub struct FrameCtx<'a> {
    pub painter: &'a egui::Painter,
    pub stage: Rect,
    pub grid: &'a mut GridView,
    pub dt: f32,
    pub elapsed: f64,
}

impl FrameCtx<'_> {
    /// Converts a stage-local position to screen space.
    pub fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.stage.min + pos.to_vec2()
    }
}

/// One dated composition. `setup` runs once after the grid exists;
/// `update` runs every frame.
pub trait Sketch {
    fn context(&self) -> &SketchContext;
    fn setup(&mut self, grid: &mut GridView);
    fn update(&mut self, frame: &mut FrameCtx<'_>);
}

impl std::fmt::Debug for dyn Sketch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketch")
            .field("code", &self.context().code)
            .finish()
    }
}

/// Instantiates the sketch for a date string like "20240504".
pub fn create(date: &str) -> Result<Box<dyn Sketch>, SketchError> {
    match date {
        "20240331" => Ok(Box::new(s20240331::RandomNumbers::new())),
        "20240408" => Ok(Box::new(s20240408::FallingTime::new())),
        "20240411" => Ok(Box::new(s20240411::TypeOnTitles::new())),
        "20240429" => Ok(Box::new(s20240429::NeedleField::new())),
        "20240504" => Ok(Box::new(s20240504::WindObserved::new()?)),
        "20240525" => Ok(Box::new(s20240525::WindyWeek::new()?)),
        "20240601" => Ok(Box::new(s20240601::CityLights::new()?)),
        other => Err(SketchError::UnknownDate(other.to_string())),
    }
}

/// The furniture every sketch shares: code and titles along the top,
/// time indicator bottom-left, clock bottom-right, all grid-anchored.
pub struct Furniture {
    code: RandomTitleOneLine,
    code_id: AnchorId,
    tech: RandomTitleOneLine,
    tech_id: AnchorId,
    title: RandomTitleOneLine,
    title_id: AnchorId,
    indicator: TimeIndicator,
    indicator_id: AnchorId,
    clock: Clock,
    clock_id: AnchorId,
}

impl Furniture {
    pub fn attach(ctx: &SketchContext, grid: &mut GridView) -> Self {
        let color = ctx.title_color();
        let mut code = RandomTitleOneLine::new(ctx.code.clone(), 14.0, color, 0.25);
        code.start();
        let mut tech = RandomTitleOneLine::new(ctx.tech_title.clone(), 14.0, color, 0.25);
        tech.start();
        let mut title = RandomTitleOneLine::new(ctx.title.clone(), 14.0, color, 0.25);
        title.start();

        let right = grid.division_x() as i32 - 1;
        let bottom = grid.division_y() as i32 - 1;
        Self {
            code_id: grid.add_anchor(1, 1, GridAlign::TopLeft, Vec2::ZERO),
            code,
            tech_id: grid.add_anchor(11, 1, GridAlign::TopLeft, Vec2::ZERO),
            tech,
            title_id: grid.add_anchor(right, 1, GridAlign::TopRight, Vec2::ZERO),
            title,
            indicator_id: grid.add_anchor(1, bottom, GridAlign::BottomLeft, Vec2::ZERO),
            indicator: TimeIndicator::new(14.0, color),
            clock_id: grid.add_anchor(right, bottom, GridAlign::BottomRight, Vec2::ZERO),
            clock: Clock::new(14.0, color),
        }
    }

    pub fn update(&mut self, frame: &mut FrameCtx<'_>) {
        self.code.update(frame.dt);
        self.tech.update(frame.dt);
        self.title.update(frame.dt);
        self.indicator.update(frame.dt);
        self.clock.update();

        let titles = [
            (&self.code, self.code_id),
            (&self.tech, self.tech_id),
            (&self.title, self.title_id),
        ];
        for (view, id) in titles {
            frame.grid.set_anchor_size(id, view.measure(frame.painter));
        }
        frame
            .grid
            .set_anchor_size(self.indicator_id, self.indicator.measure(frame.painter));
        frame
            .grid
            .set_anchor_size(self.clock_id, self.clock.measure(frame.painter));

        if let Some(pos) = frame.grid.position(self.code_id) {
            self.code.paint(frame.painter, frame.to_screen(pos));
        }
        if let Some(pos) = frame.grid.position(self.tech_id) {
            self.tech.paint(frame.painter, frame.to_screen(pos));
        }
        if let Some(pos) = frame.grid.position(self.title_id) {
            self.title.paint(frame.painter, frame.to_screen(pos));
        }
        if let Some(pos) = frame.grid.position(self.indicator_id) {
            self.indicator.paint(frame.painter, frame.to_screen(pos));
        }
        if let Some(pos) = frame.grid.position(self.clock_id) {
            self.clock.paint(frame.painter, frame.to_screen(pos));
        }
    }
}
