use egui::Color32;
use serde::{Deserialize, Serialize};

/// Per-sketch configuration, passed explicitly to whichever component
/// needs it. One instance per dated sketch; no process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchContext {
    /// Sketch code, e.g. "DESIGN SKETCH 20240331"
    pub code: String,
    /// The technology the sketch explores
    pub tech_title: String,
    /// Human title of the sketch
    pub title: String,
    /// Title/accent color as RGB
    pub title_color: [u8; 3],
    /// Stage aspect ratio (width / height)
    pub stage_aspect: f32,
    /// Margin around the stage in pixels
    pub margin: f32,
    pub grid_divisions_x: u32,
    pub grid_divisions_y: u32,
}

impl SketchContext {
    pub fn title_color(&self) -> Color32 {
        let [r, g, b] = self.title_color;
        Color32::from_rgb(r, g, b)
    }
}

impl Default for SketchContext {
    fn default() -> Self {
        Self {
            code: String::new(),
            tech_title: String::new(),
            title: String::new(),
            title_color: [0x00, 0x1f, 0x3f],
            stage_aspect: 1.0,
            margin: 24.0,
            grid_divisions_x: 30,
            grid_divisions_y: 28,
        }
    }
}
