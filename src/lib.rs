#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod panels;
pub mod render;
pub mod session;
pub mod text_metrics;

pub use app::DocEditorApp;
pub use config::{EditorConfig, HitTestDepth};
pub use element::{ChartElement, Element, ElementType, Group, ImageElement, TextElement};
pub use error::{ElementError, SessionError};
pub use geometry::{Point, Rect};
pub use id_generator::ElementId;
pub use render::{DrawCommand, RecordingSurface, RenderSurface};
pub use session::{EditorSession, SelectionState};
pub use text_metrics::{MonospaceMeasurer, TextMeasurer, TextMetrics};
