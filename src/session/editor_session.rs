use log::{debug, info};

use super::SelectionState;
use crate::config::{EditorConfig, HitTestDepth};
use crate::element::{Element, ElementType, Group, TextElement};
use crate::error::SessionError;
use crate::event::{EditorEvent, EventBus};
use crate::geometry::Point;
use crate::id_generator::ElementId;
use crate::render::RenderSurface;
use crate::text_metrics::TextMeasurer;

/// Boundary between UI events and the document tree.
///
/// Owns the page and tracks which element, if any, the user last clicked.
/// Every structural change goes through the session so the selection can never
/// point at an element that has left the tree.
pub struct EditorSession {
    page: Group,
    selection: SelectionState,
    last_pointer: Option<Point>,
    config: EditorConfig,
    measurer: Box<dyn TextMeasurer>,
    event_bus: EventBus,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("page", &self.page)
            .field("selection", &self.selection)
            .field("last_pointer", &self.last_pointer)
            .field("config", &self.config)
            .field("event_bus", &self.event_bus)
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Creates a session over an empty page
    pub fn new(config: EditorConfig, measurer: Box<dyn TextMeasurer>) -> Self {
        Self::with_page(Group::new(), config, measurer)
    }

    pub fn with_page(page: Group, config: EditorConfig, measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            page,
            selection: SelectionState::NoSelection,
            last_pointer: None,
            config,
            measurer,
            event_bus: EventBus::new(),
        }
    }

    pub fn page(&self) -> &Group {
        &self.page
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Swap the font-metrics service, e.g. once a real font system is available
    pub fn set_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
    }

    pub fn events(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selection.selected()
    }

    pub fn selected_element(&self) -> Option<&ElementType> {
        self.page.get(self.selection.selected()?)
    }

    /// Content of the selection when it is an editable text element
    pub fn selected_text(&self) -> Option<&str> {
        self.selected_element()
            .and_then(Element::as_editable_text)
            .map(TextElement::content)
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    /// Resolve a pointer press and select whatever it hit.
    ///
    /// Depth follows [`EditorConfig::hit_test_depth`]. A miss clears the selection.
    pub fn click(&mut self, point: Point) -> Option<ElementId> {
        self.last_pointer = Some(point);

        let measurer = self.measurer.as_ref();
        let hit = match self.config.hit_test_depth {
            HitTestDepth::TopLevel => self.page.find_element_at(point, measurer),
            HitTestDepth::Deepest => self.page.find_leaf_at(point, measurer),
        }
        .map(Element::id);

        debug!("Clicked at {}, selected={:?}", point, hit);
        self.set_selection(SelectionState::from_hit(hit));
        hit
    }

    /// Replace the selected element's text.
    ///
    /// Returns `false` without touching anything when nothing is selected or the
    /// selection has no editable text.
    pub fn apply_text(&mut self, text: &str) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        let Some(target) = self
            .page
            .get_mut(id)
            .and_then(|e| e.as_editable_text_mut())
        else {
            return false;
        };

        let old = target.content().to_owned();
        target.set_content(text);
        self.event_bus.emit(EditorEvent::TextEdited {
            id,
            old,
            new: text.to_owned(),
        });
        true
    }

    /// Add a text element at the last pointer location and select it.
    ///
    /// Surrounding whitespace is trimmed; blank input is rejected.
    pub fn add_text(&mut self, text: &str) -> Result<ElementId, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyText);
        }

        let position = self
            .last_pointer
            .unwrap_or(self.config.fallback_insert_point);
        let element = TextElement::new(position, text, self.config.default_text_size)?;
        let id = self.add_element(element);
        self.set_selection(SelectionState::Selected(id));
        info!("Added new text at {} with text='{}'", position, text);
        Ok(id)
    }

    /// Append an element to the page
    pub fn add_element(&mut self, element: impl Into<ElementType>) -> ElementId {
        let element = element.into();
        let element_type = element.element_type();
        let id = self.page.add(element);
        self.event_bus
            .emit(EditorEvent::ElementAdded { id, element_type });
        id
    }

    /// Remove `id` from wherever it sits in the tree.
    ///
    /// Clears the selection if it was the removed element or lay inside it.
    /// Removing an absent id is a no-op.
    pub fn remove_element(&mut self, id: ElementId) -> Option<ElementType> {
        let removed = self.page.remove_deep(id)?;
        self.event_bus.emit(EditorEvent::ElementRemoved { id });

        if let Some(selected) = self.selection.selected() {
            if removed.find(selected).is_some() {
                self.set_selection(SelectionState::NoSelection);
            }
        }
        Some(removed)
    }

    pub fn remove_selected(&mut self) -> Option<ElementType> {
        let id = self.selection.selected()?;
        self.remove_element(id)
    }

    pub fn move_selected(&mut self, dx: i32, dy: i32) -> Result<(), SessionError> {
        let id = self.selection.selected().ok_or(SessionError::NothingSelected)?;
        let element = self.page.get_mut(id).ok_or(SessionError::NothingSelected)?;
        element.move_by(dx, dy);
        self.event_bus.emit(EditorEvent::Transformed { id });
        Ok(())
    }

    pub fn resize_selected(&mut self, factor: f64) -> Result<(), SessionError> {
        let id = self.selection.selected().ok_or(SessionError::NothingSelected)?;
        let element = self.page.get_mut(id).ok_or(SessionError::NothingSelected)?;
        element.resize(factor)?;
        self.event_bus.emit(EditorEvent::Transformed { id });
        Ok(())
    }

    /// Move every element on the page
    pub fn move_page(&mut self, dx: i32, dy: i32) {
        self.page.move_by(dx, dy);
        self.event_bus
            .emit(EditorEvent::Transformed { id: self.page.id() });
    }

    /// Resize every element on the page
    pub fn resize_page(&mut self, factor: f64) -> Result<(), SessionError> {
        self.page.resize(factor)?;
        self.event_bus
            .emit(EditorEvent::Transformed { id: self.page.id() });
        Ok(())
    }

    /// Draw the page, then outline the selection on top
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        self.page.draw(surface);

        if let Some(bounds) = self
            .selected_element()
            .and_then(|e| e.bounds(self.measurer.as_ref()))
        {
            debug!("Highlighting {:?}", self.selection);
            surface.highlight(bounds.expand(self.config.highlight_padding));
        }
    }

    fn set_selection(&mut self, new: SelectionState) {
        let old = std::mem::replace(&mut self.selection, new);
        if old != new {
            self.event_bus.emit(EditorEvent::SelectionChanged {
                old: old.selected(),
                new: new.selected(),
            });
        }
    }
}
