use egui::{Align2, FontId};

use super::data;
use super::{FrameCtx, Furniture, Sketch, SketchError};
use crate::context::SketchContext;
use crate::grid::{position_by_grid, GridView};
use crate::views::{DayBundle, WindSample};

/// 20240525 — a week of wind, one star of bars per day, fading in day
/// by day.
pub struct WindyWeek {
    ctx: SketchContext,
    furniture: Option<Furniture>,
    days: Vec<(String, DayBundle)>,
}

impl WindyWeek {
    pub fn new() -> Result<Self, SketchError> {
        let records = data::load_weather()?;

        // group consecutive records by their calendar day
        let mut days: Vec<(String, Vec<WindSample>)> = Vec::new();
        for record in &records {
            let day = record.datetime[..10].to_string();
            let sample = WindSample {
                direction_deg: record.wind_direction_angle,
                speed: record.wind_speed,
            };
            match days.last_mut() {
                Some((current, samples)) if *current == day => samples.push(sample),
                _ => days.push((day, vec![sample])),
            }
        }
        log::info!("bundled {} days of wind", days.len());

        let days = days
            .into_iter()
            .enumerate()
            .map(|(i, (day, samples))| (day, DayBundle::new(&samples, i as f32 * 1.5)))
            .collect();

        Ok(Self {
            ctx: SketchContext {
                code: "DESIGN SKETCH 20240525".into(),
                tech_title: "seven days of observations".into(),
                title: "A windy week".into(),
                ..SketchContext::default()
            },
            furniture: None,
            days,
        })
    }
}

impl Sketch for WindyWeek {
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

        let color = self.ctx.title_color();
        let mid_y = frame.grid.division_y() as f32 / 2.0;
        for (i, (day, bundle)) in self.days.iter_mut().enumerate() {
            bundle.update(frame.dt);

            let gx = 3.0 + i as f32 * 4.0;
            let pivot = position_by_grid(gx, mid_y, frame.grid);
            bundle.paint(frame.painter, frame.to_screen(pivot), color);

            let label_pos = position_by_grid(gx, mid_y + 2.0, frame.grid);
            frame.painter.text(
                frame.to_screen(label_pos),
                Align2::CENTER_TOP,
                &day[5..],
                FontId::proportional(12.0),
                color,
            );
        }
    }
}
