use log::warn;

use crate::config::EditorConfig;
use crate::element::{Group, TextElement};
use crate::error::{ElementResult, SessionError};
use crate::event::LoggingEventHandler;
use crate::geometry::Point;
use crate::panels;
use crate::session::EditorSession;
use crate::text_metrics::{EguiMeasurer, TextMeasurer};

/// Desktop shell around an [`EditorSession`].
///
/// Holds only the toolbar's text buffers; everything else lives in the session.
pub struct DocEditorApp {
    session: EditorSession,
    /// Contents of the "New Text" field
    pub(crate) new_text: String,
    /// Contents of the "Selected Text" field
    pub(crate) edit_text: String,
}

impl DocEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_measurer(Box::new(EguiMeasurer::new(cc.egui_ctx.clone())))
    }

    pub fn with_measurer(measurer: Box<dyn TextMeasurer>) -> Self {
        let page = demo_page().unwrap_or_else(|err| {
            warn!("Starting with an empty page: {}", err);
            Group::new()
        });
        let session = EditorSession::with_page(page, EditorConfig::default(), measurer);
        session.events().subscribe(Box::new(LoggingEventHandler));

        Self {
            session,
            new_text: String::new(),
            edit_text: String::new(),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Select whatever lies under `point` and load its text into the edit field
    pub fn handle_click(&mut self, point: Point) {
        self.session.click(point);
        self.edit_text = self.session.selected_text().unwrap_or_default().to_owned();
    }

    pub fn apply_text(&mut self) -> bool {
        self.session.apply_text(&self.edit_text)
    }

    pub fn remove_selected(&mut self) {
        if self.session.remove_selected().is_some() {
            self.edit_text.clear();
        }
    }

    pub fn add_text(&mut self) {
        match self.session.add_text(&self.new_text) {
            Ok(_) => {
                self.edit_text = self.new_text.trim().to_owned();
                self.new_text.clear();
            }
            Err(SessionError::EmptyText) => {}
            Err(err) => warn!("Could not add text: {}", err),
        }
    }
}

fn demo_page() -> ElementResult<Group> {
    let mut page = Group::new();
    page.add(TextElement::new(Point::new(50, 50), "Click to edit", 24.0)?);
    page.add(TextElement::new(
        Point::new(50, 100),
        "Composite Pattern Demo",
        18.0,
    )?);
    Ok(page)
}

impl eframe::App for DocEditorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_metrics::MonospaceMeasurer;

    fn test_app() -> DocEditorApp {
        DocEditorApp::with_measurer(Box::new(MonospaceMeasurer::default()))
    }

    #[test]
    fn test_starts_with_demo_page() {
        let app = test_app();
        assert_eq!(app.session().page().len(), 2);
        assert!(app.session().selected().is_none());
    }

    #[test]
    fn test_click_loads_edit_field() {
        let mut app = test_app();
        app.handle_click(Point::new(55, 45));
        assert_eq!(app.edit_text, "Click to edit");

        app.edit_text = "Edited".to_owned();
        assert!(app.apply_text());
        assert_eq!(app.session().selected_text(), Some("Edited"));

        app.handle_click(Point::new(900, 900));
        assert!(app.edit_text.is_empty());
    }

    #[test]
    fn test_add_then_remove() {
        let mut app = test_app();
        app.new_text = "  Fresh  ".to_owned();
        app.add_text();
        assert_eq!(app.session().page().len(), 3);
        assert_eq!(app.edit_text, "Fresh");
        assert!(app.new_text.is_empty());

        app.remove_selected();
        assert_eq!(app.session().page().len(), 2);
        assert!(app.edit_text.is_empty());
    }
}
