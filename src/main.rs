//! Reversi GUI
//!
//! Play Reversi against the computer. Set `RUST_LOG=debug` to log the engine's
//! search.

use reversi::ui::ReversiApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(|cc| Ok(Box::new(ReversiApp::new(cc)))),
    )
}
