use thiserror::Error;

/// Caller-contract violations on the element tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementError {
    /// Resize factors must be finite and strictly positive
    #[error("invalid resize factor {0}: must be finite and greater than zero")]
    InvalidResizeFactor(f64),

    /// Text sizes must be finite and strictly positive
    #[error("invalid text size {0}: must be finite and greater than zero")]
    InvalidTextSize(f64),
}

/// Errors surfaced by the editor session boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Text insertion was requested with blank content
    #[error("cannot add an empty text element")]
    EmptyText,

    /// The operation requires a selection
    #[error("nothing is selected")]
    NothingSelected,

    #[error(transparent)]
    Element(#[from] ElementError),
}

pub type ElementResult<T = ()> = Result<T, ElementError>;
