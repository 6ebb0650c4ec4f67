mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::EditorEvent;
pub use handlers::LoggingEventHandler;

/// Receives every event emitted on an [`EventBus`].
///
/// Handlers must not call [`EventBus::subscribe`] from `handle_event`: the bus
/// holds its handler list borrowed during `emit`, so doing so panics.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}
