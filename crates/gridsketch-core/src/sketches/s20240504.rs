use egui::{Align2, FontId};

use super::data::{self, WeatherRecord};
use super::{FrameCtx, Furniture, Sketch, SketchError};
use crate::context::SketchContext;
use crate::grid::{position_by_grid, GridView};
use crate::utils::math;
use crate::views::Bar;

const NOISE_FREQUENCY: f32 = 4.2;
const NOISE_AMPLITUDE: f32 = 0.2;
const RECORD_SECONDS: f32 = 2.0;

/// 20240504 — hourly wind observations replayed over a field of bars.
/// Every bar leans toward the current record's direction, perturbed by
/// smooth noise so the field shimmers instead of snapping.
pub struct WindObserved {
    ctx: SketchContext,
    furniture: Option<Furniture>,
    records: Vec<WeatherRecord>,
    bars: Vec<(i32, i32, Bar)>,
}

impl WindObserved {
    pub fn new() -> Result<Self, SketchError> {
        let records = data::load_weather()?;
        log::info!("loaded {} wind records", records.len());
        Ok(Self {
            ctx: SketchContext {
                code: "DESIGN SKETCH 20240504".into(),
                tech_title: "wind records, hour by hour".into(),
                title: "The weather as it was written down".into(),
                ..SketchContext::default()
            },
            furniture: None,
            records,
            bars: Vec::new(),
        })
    }

    fn current_record(&self, elapsed: f64) -> &WeatherRecord {
        let index = (elapsed / RECORD_SECONDS as f64) as usize % self.records.len();
        &self.records[index]
    }
}

impl Sketch for WindObserved {
    fn context(&self) -> &SketchContext {
        &self.ctx
    }

    fn setup(&mut self, grid: &mut GridView) {
        self.furniture = Some(Furniture::attach(&self.ctx, grid));

        let right = grid.division_x() as i32 - 2;
        let bottom = grid.division_y() as i32 - 4;
        for gx in (3..=right).step_by(2) {
            for gy in (4..=bottom).step_by(2) {
                self.bars.push((gx, gy, Bar::new(1.0)));
            }
        }
    }

    fn update(&mut self, frame: &mut FrameCtx<'_>) {
        if let Some(furniture) = &mut self.furniture {
            furniture.update(frame);
        }

        let record = self.current_record(frame.elapsed).clone();
        let base_angle = math::deg_to_rad(record.wind_direction_angle);
        let length = math::scale(record.wind_speed, 0.0, 5.0, 0.5, 1.0);
        let color = self.ctx.title_color();

        for (gx, gy, bar) in &mut self.bars {
            let px = *gx as f32 / frame.grid.division_x() as f32;
            let py = *gy as f32 / frame.grid.division_y() as f32;
            let wobble = math::noise2(
                px * NOISE_FREQUENCY,
                py * NOISE_FREQUENCY + frame.elapsed as f32 * 0.2,
            ) * NOISE_AMPLITUDE
                * std::f32::consts::TAU;
            bar.angle = math::ease_angle(bar.angle, base_angle + wobble, 0.05);
            bar.set_length_scale(length);

            let pos = position_by_grid(*gx as f32, *gy as f32, frame.grid);
            bar.paint(frame.painter, frame.to_screen(pos), color);
        }

        // current record readout above the bottom furniture
        let readout = format!(
            "{}  {}  {:.1} m/s",
            record.datetime, record.wind_direction, record.wind_speed
        );
        let pos = position_by_grid(1.0, frame.grid.division_y() as f32 - 3.0, frame.grid);
        frame.painter.text(
            frame.to_screen(pos),
            Align2::LEFT_TOP,
            readout,
            FontId::proportional(14.0),
            color,
        );
    }
}
