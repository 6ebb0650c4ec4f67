use log::{debug, trace};

use super::{Element, ElementType};
use crate::element::common;
use crate::error::ElementResult;
use crate::geometry::{Point, Rect};
use crate::id_generator::{ElementId, generate_id};
use crate::render::RenderSurface;
use crate::text_metrics::TextMeasurer;

/// Composite element owning an ordered list of children.
///
/// Insertion order is both render order and hit-test precedence: the first
/// child containing a point wins. Children are owned by value, so an element
/// sits in exactly one group and `add` moves it out of the caller's hands.
#[derive(Debug)]
pub struct Group {
    id: ElementId,
    children: Vec<ElementType>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            children: Vec::new(),
        }
    }

    /// Append `element` as the last child, taking ownership of it
    pub fn add(&mut self, element: impl Into<ElementType>) -> ElementId {
        let element = element.into();
        let id = element.id();
        debug!("Added {} {} to group {}", element.element_type(), id, self.id);
        self.children.push(element);
        id
    }

    /// Remove the direct child with `id`, releasing ownership to the caller.
    ///
    /// Returns `None` and leaves the group untouched when no such child exists.
    pub fn remove(&mut self, id: ElementId) -> Option<ElementType> {
        let index = self.children.iter().position(|c| c.id() == id)?;
        let removed = self.children.remove(index);
        debug!("Removed {} {} from group {}", removed.element_type(), id, self.id);
        Some(removed)
    }

    /// Like [`Group::remove`], but also searches nested groups
    pub fn remove_deep(&mut self, id: ElementId) -> Option<ElementType> {
        if let Some(removed) = self.remove(id) {
            return Some(removed);
        }
        self.children
            .iter_mut()
            .filter_map(ElementType::as_group_mut)
            .find_map(|g| g.remove_deep(id))
    }

    /// First direct child containing `point`.
    ///
    /// Resolution is one level deep: a point inside a leaf of a nested group
    /// yields that nested group. See [`Group::find_leaf_at`] for the innermost leaf.
    pub fn find_element_at(
        &self,
        point: Point,
        measurer: &dyn TextMeasurer,
    ) -> Option<&ElementType> {
        let found = self.children.iter().find(|c| c.contains(point, measurer));
        if found.is_none() {
            trace!("No element found at {} in group {}", point, self.id);
        }
        found
    }

    /// Innermost leaf containing `point`, following first matches through nested groups
    pub fn find_leaf_at(&self, point: Point, measurer: &dyn TextMeasurer) -> Option<&ElementType> {
        match self.find_element_at(point, measurer)? {
            ElementType::Group(nested) => nested.find_leaf_at(point, measurer),
            leaf => Some(leaf),
        }
    }

    /// Look up `id` anywhere below this group
    pub fn get(&self, id: ElementId) -> Option<&ElementType> {
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    pub fn children(&self) -> &[ElementType] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Checks that every text size in the subtree stays valid after scaling by `factor`
    fn check_resize(&self, factor: f64) -> ElementResult {
        common::validate_factor(factor)?;
        for child in &self.children {
            match child {
                ElementType::Text(text) => {
                    text.scaled_size(factor)?;
                }
                ElementType::Group(group) => group.check_resize(factor)?,
                ElementType::Image(_) | ElementType::Chart(_) => {}
            }
        }
        Ok(())
    }
}

impl Element for Group {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "group"
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
        debug!("Moved group {} by ({}, {})", self.id, dx, dy);
    }

    fn resize(&mut self, factor: f64) -> ElementResult {
        self.check_resize(factor)?;
        for child in &mut self.children {
            child.resize(factor)?;
        }
        debug!("Resized group {} by factor {}", self.id, factor);
        Ok(())
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        for child in &self.children {
            child.draw(surface);
        }
        trace!("Drew group {} with {} elements", self.id, self.children.len());
    }

    fn contains(&self, point: Point, measurer: &dyn TextMeasurer) -> bool {
        self.children.iter().any(|c| c.contains(point, measurer))
    }

    fn bounds(&self, measurer: &dyn TextMeasurer) -> Option<Rect> {
        self.children
            .iter()
            .filter_map(|c| c.bounds(measurer))
            .filter(|r| !r.is_empty())
            .reduce(|acc, r| acc.union(&r))
    }
}
