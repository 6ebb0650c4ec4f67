mod editor_session;
mod selection;

pub use editor_session::EditorSession;
pub use selection::SelectionState;
