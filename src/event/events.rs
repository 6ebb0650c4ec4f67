use crate::id_generator::ElementId;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SelectionChanged {
        old: Option<ElementId>,
        new: Option<ElementId>,
    },
    ElementAdded {
        id: ElementId,
        element_type: &'static str,
    },
    ElementRemoved {
        id: ElementId,
    },
    TextEdited {
        id: ElementId,
        old: String,
        new: String,
    },
    /// Geometry of `id` (and everything below it) changed
    Transformed {
        id: ElementId,
    },
}
