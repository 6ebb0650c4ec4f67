//! Selection lifecycle of an editor session.
//!
//! ```text
//!   ┌─────────────┐  click hits e   ┌──────────────┐
//!   │ NoSelection ├────────────────►│ Selected(e)  │
//!   │             │◄────────────────┤              │
//!   └─────────────┘  click misses,  └──────────────┘
//!                    e removed
//! ```
//!
//! The selection refers to its element by id and never owns it. There is no
//! terminal state.

use crate::id_generator::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected(ElementId),
}

impl SelectionState {
    /// State reached after a point query resolved to `hit`
    pub fn from_hit(hit: Option<ElementId>) -> Self {
        hit.map_or(SelectionState::NoSelection, SelectionState::Selected)
    }

    pub fn selected(&self) -> Option<ElementId> {
        match self {
            SelectionState::Selected(id) => Some(*id),
            SelectionState::NoSelection => None,
        }
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;

    #[test]
    fn test_from_hit() {
        let id = generate_id();
        assert_eq!(SelectionState::from_hit(Some(id)), SelectionState::Selected(id));
        assert_eq!(SelectionState::from_hit(None), SelectionState::NoSelection);
        assert!(SelectionState::default().is_empty());
        assert!(SelectionState::Selected(id).is_selected(id));
    }
}
