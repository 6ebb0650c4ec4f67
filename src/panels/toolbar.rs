use crate::DocEditorApp;

const FIELD_WIDTH: f32 = 150.0;

pub fn toolbar_panel(app: &mut DocEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("New Text:");
            ui.add(egui::TextEdit::singleline(&mut app.new_text).desired_width(FIELD_WIDTH));
            if ui.button("Add Text").clicked() {
                app.add_text();
            }

            ui.separator();

            ui.label("Selected Text:");
            ui.add(egui::TextEdit::singleline(&mut app.edit_text).desired_width(FIELD_WIDTH));
            if ui.button("Apply Text").clicked() {
                app.apply_text();
            }

            let has_selection = app.session().selected().is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("Remove"))
                .clicked()
            {
                app.remove_selected();
            }
        });
    });
}
