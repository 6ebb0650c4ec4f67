#![warn(clippy::all, rust_2018_idioms)]

use doc_composer::{DocEditorApp, EditorConfig};

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = EditorConfig::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.canvas_size)
            .with_title("Editable Document Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Editable Document Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(DocEditorApp::new(cc)))),
    )
}
