use crate::error::ElementResult;
use crate::geometry::{Point, Rect};
use crate::id_generator::ElementId;
use crate::render::RenderSurface;
use crate::text_metrics::TextMeasurer;

mod chart;
pub(crate) mod common;
mod group;
mod image;
mod text;

pub use chart::ChartElement;
pub use common::validate_factor;
pub use group::Group;
pub use image::ImageElement;
pub use text::TextElement;

/// Common trait that every node of the document tree implements, leaves and groups alike.
///
/// Geometry changes only through `move_by` and `resize`. `draw` and `contains`
/// never mutate the element.
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Translate the element by the given deltas.
    ///
    /// Coordinates saturate at the `i32` limits instead of wrapping.
    fn move_by(&mut self, dx: i32, dy: i32);

    /// Scale the element's size-defining geometry by `factor`.
    ///
    /// Integer dimensions are rounded to the nearest whole unit after every call,
    /// so repeated resizes accumulate rounding. Factors that are not finite and
    /// strictly positive are rejected and leave the element untouched, as are
    /// factors that would push a text size out of the positive finite range.
    fn resize(&mut self, factor: f64) -> ElementResult;

    /// Emit the element's visual representation to `surface`
    fn draw(&self, surface: &mut dyn RenderSurface);

    /// Test if the element's current bounds contain `point`
    fn contains(&self, point: Point, measurer: &dyn TextMeasurer) -> bool;

    /// Current hit-test rectangle, `None` for an element that covers nothing
    fn bounds(&self, measurer: &dyn TextMeasurer) -> Option<Rect>;

    /// Narrow to an element with editable text content
    fn as_editable_text(&self) -> Option<&TextElement> {
        None
    }

    fn as_editable_text_mut(&mut self) -> Option<&mut TextElement> {
        None
    }
}

/// Enumeration of all element types in the document
#[derive(Debug)]
pub enum ElementType {
    Text(TextElement),
    Image(ImageElement),
    Chart(ChartElement),
    Group(Group),
}

impl ElementType {
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            ElementType::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            ElementType::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, ElementType::Group(_))
    }

    /// Find `id` in this element or, for groups, anywhere below it
    pub fn find(&self, id: ElementId) -> Option<&ElementType> {
        if self.id() == id {
            return Some(self);
        }
        self.as_group().and_then(|g| g.get(id))
    }

    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        if self.id() == id {
            return Some(self);
        }
        self.as_group_mut().and_then(|g| g.get_mut(id))
    }
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        match self {
            ElementType::Text(t) => t.id(),
            ElementType::Image(i) => i.id(),
            ElementType::Chart(c) => c.id(),
            ElementType::Group(g) => g.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Text(t) => t.element_type(),
            ElementType::Image(i) => i.element_type(),
            ElementType::Chart(c) => c.element_type(),
            ElementType::Group(g) => g.element_type(),
        }
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            ElementType::Text(t) => t.move_by(dx, dy),
            ElementType::Image(i) => i.move_by(dx, dy),
            ElementType::Chart(c) => c.move_by(dx, dy),
            ElementType::Group(g) => g.move_by(dx, dy),
        }
    }

    fn resize(&mut self, factor: f64) -> ElementResult {
        match self {
            ElementType::Text(t) => t.resize(factor),
            ElementType::Image(i) => i.resize(factor),
            ElementType::Chart(c) => c.resize(factor),
            ElementType::Group(g) => g.resize(factor),
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        match self {
            ElementType::Text(t) => t.draw(surface),
            ElementType::Image(i) => i.draw(surface),
            ElementType::Chart(c) => c.draw(surface),
            ElementType::Group(g) => g.draw(surface),
        }
    }

    fn contains(&self, point: Point, measurer: &dyn TextMeasurer) -> bool {
        match self {
            ElementType::Text(t) => t.contains(point, measurer),
            ElementType::Image(i) => i.contains(point, measurer),
            ElementType::Chart(c) => c.contains(point, measurer),
            ElementType::Group(g) => g.contains(point, measurer),
        }
    }

    fn bounds(&self, measurer: &dyn TextMeasurer) -> Option<Rect> {
        match self {
            ElementType::Text(t) => t.bounds(measurer),
            ElementType::Image(i) => i.bounds(measurer),
            ElementType::Chart(c) => c.bounds(measurer),
            ElementType::Group(g) => g.bounds(measurer),
        }
    }

    fn as_editable_text(&self) -> Option<&TextElement> {
        match self {
            ElementType::Text(t) => t.as_editable_text(),
            _ => None,
        }
    }

    fn as_editable_text_mut(&mut self) -> Option<&mut TextElement> {
        match self {
            ElementType::Text(t) => t.as_editable_text_mut(),
            _ => None,
        }
    }
}

impl From<TextElement> for ElementType {
    fn from(text: TextElement) -> Self {
        ElementType::Text(text)
    }
}

impl From<ImageElement> for ElementType {
    fn from(image: ImageElement) -> Self {
        ElementType::Image(image)
    }
}

impl From<ChartElement> for ElementType {
    fn from(chart: ChartElement) -> Self {
        ElementType::Chart(chart)
    }
}

impl From<Group> for ElementType {
    fn from(group: Group) -> Self {
        ElementType::Group(group)
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    /// Create a new text element with its baseline starting at `position`
    pub fn create_text(
        position: Point,
        content: impl Into<String>,
        size: f64,
    ) -> ElementResult<ElementType> {
        TextElement::new(position, content, size).map(ElementType::Text)
    }

    /// Create a new image element
    pub fn create_image(
        position: Point,
        width: i32,
        height: i32,
        source: impl Into<String>,
    ) -> ElementType {
        ElementType::Image(ImageElement::new(position, width, height, source))
    }

    /// Create a new chart element
    pub fn create_chart(
        position: Point,
        width: i32,
        height: i32,
        title: impl Into<String>,
    ) -> ElementType {
        ElementType::Chart(ChartElement::new(position, width, height, title))
    }

    /// Create a group holding `children` in the given order
    pub fn create_group(children: impl IntoIterator<Item = ElementType>) -> ElementType {
        let mut group = Group::new();
        for child in children {
            group.add(child);
        }
        ElementType::Group(group)
    }
}
