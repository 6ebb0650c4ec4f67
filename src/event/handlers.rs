use log::info;

use crate::event::{EditorEvent, EventHandler};

/// Forwards every editor event to the `log` facade
#[derive(Debug, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::SelectionChanged { old, new } => {
                info!("Selection changed: {:?} -> {:?}", old, new)
            }
            EditorEvent::ElementAdded { id, element_type } => {
                info!("Added {} {}", element_type, id)
            }
            EditorEvent::ElementRemoved { id } => info!("Removed element {}", id),
            EditorEvent::TextEdited { id, old, new } => {
                info!("Text {} edited: '{}' -> '{}'", id, old, new)
            }
            EditorEvent::Transformed { id } => info!("Element {} transformed", id),
        }
    }
}
