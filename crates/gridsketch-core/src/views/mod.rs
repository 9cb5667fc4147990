use std::sync::Arc;

use egui::{Color32, FontId, Galley};

pub mod bar;
pub mod clock;
pub mod day_bundle;
pub mod disk;
pub mod globe;
pub mod random_title;
pub mod random_value;
pub mod time_disk;
pub mod time_indicator;

pub use bar::Bar;
pub use clock::Clock;
pub use day_bundle::{DayBundle, WindSample};
pub use disk::Disk;
pub use globe::{City, Globe};
pub use random_title::{RandomTitleOneLine, TypeStatus};
pub use random_value::RandomValueContainer;
pub use time_disk::TimeDisk;
pub use time_indicator::TimeIndicator;

/// Lays out a single line of text the way every view draws it.
pub(crate) fn text_galley(
    painter: &egui::Painter,
    text: String,
    font_size: f32,
    color: Color32,
    alpha: f32,
) -> Arc<Galley> {
    painter.layout_no_wrap(
        text,
        FontId::proportional(font_size),
        color.gamma_multiply(alpha),
    )
}
