use egui::ViewportBuilder;

use gridsketch_core::sketches;
use gridsketch_core::SketchApp;

/// The main function is the entry point of the application.
///
/// It initializes the logger, instantiates the sketch named on the
/// command line (defaulting to the latest one), and hands it to the
/// `eframe` runtime.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env().init();

    let date = std::env::args()
        .nth(1)
        .unwrap_or_else(|| sketches::LATEST.to_string());

    let sketch = match sketches::create(&date) {
        Ok(sketch) => sketch,
        Err(err) => {
            log::error!("{err}");
            eprintln!("usage: gridsketch [DATE]");
            eprintln!("available sketches: {}", sketches::AVAILABLE.join(", "));
            std::process::exit(2);
        }
    };

    let app = match SketchApp::new(sketch) {
        Ok(app) => app,
        Err(err) => {
            log::error!("invalid grid configuration: {err}");
            std::process::exit(2);
        }
    };

    eframe::run_native(
        &format!("gridsketch {date}"),
        eframe::NativeOptions {
            viewport: ViewportBuilder::default().with_inner_size([960.0, 960.0]),
            ..Default::default()
        },
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
