use egui::{Color32, Sense};

use crate::DocEditorApp;
use crate::geometry::Point;
use crate::render::EguiSurface;

/// Document canvas. Clicks are mapped to document coordinates relative to the
/// canvas' top-left corner.
pub fn canvas_panel(app: &mut DocEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
            let origin = response.rect.min;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.handle_click(Point::from_pos2((pos - origin).to_pos2()));
                }
            }

            let mut surface = EguiSurface::new(&painter, origin);
            app.session().draw(&mut surface);
        });
}
