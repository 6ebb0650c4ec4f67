use crate::geometry::Point;

/// Size given to text added through the editor
pub const DEFAULT_TEXT_SIZE: f64 = 18.0;

/// Where new text lands when the pointer has never touched the canvas
pub const FALLBACK_INSERT_POINT: Point = Point::new(50, 150);

/// Gap between a selected element and its highlight outline
pub const HIGHLIGHT_PADDING: i32 = 2;

pub const CANVAS_SIZE: [f32; 2] = [1000.0, 1000.0];

/// How far a click resolves into nested groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitTestDepth {
    /// Stop at the page's direct children; a nested group is selected as a whole
    #[default]
    TopLevel,
    /// Descend through nested groups to the innermost leaf
    Deepest,
}

/// Settings for an editor session
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub default_text_size: f64,
    pub fallback_insert_point: Point,
    pub hit_test_depth: HitTestDepth,
    pub highlight_padding: i32,
    pub canvas_size: [f32; 2],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_text_size: DEFAULT_TEXT_SIZE,
            fallback_insert_point: FALLBACK_INSERT_POINT,
            hit_test_depth: HitTestDepth::default(),
            highlight_padding: HIGHLIGHT_PADDING,
            canvas_size: CANVAS_SIZE,
        }
    }
}

impl EditorConfig {
    pub fn with_hit_test_depth(mut self, depth: HitTestDepth) -> Self {
        self.hit_test_depth = depth;
        self
    }
}
