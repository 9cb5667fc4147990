// gridsketch core library
// Shared layout model, views, and sketches for the dated sketch series.

pub mod animation;
pub mod app;
pub mod context;
pub mod grid;
pub mod sketches;
pub mod utils;
pub mod views;

// Re-export the app entry point and the pieces sketches are built from
pub use app::SketchApp;
pub use context::SketchContext;
pub use grid::{AnchorId, GridAlign, GridError, GridView};
