//! Integer document-space geometry.
//!
//! Document coordinates are whole units. Translation from screen space (egui's
//! floating-point `Pos2`) happens at the UI boundary through the conversions below.

use std::fmt;

/// A point in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by the given deltas, clamped to the `i32` range
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Rounds a screen position to the nearest document point
    pub fn from_pos2(pos: egui::Pos2) -> Self {
        Self::new(pos.x.round() as i32, pos.y.round() as i32)
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x as f32, self.y as f32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// Containment is half-open: the left and top edges are inside, the right and
/// bottom edges are not. A rectangle with zero or negative extent contains nothing.
/// Edges past `i32::MAX` are handled exactly by `contains` and clamped elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_origin_size(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && (point.x as i64) < self.x as i64 + self.width as i64
            && point.y >= self.y
            && (point.y as i64) < self.y as i64 + self.height as i64
    }

    /// Smallest rectangle covering both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Grows the rectangle by `padding` on every side
    pub const fn expand(&self, padding: i32) -> Rect {
        let grow = padding.saturating_mul(2);
        Rect::new(
            self.x.saturating_sub(padding),
            self.y.saturating_sub(padding),
            self.width.saturating_add(grow),
            self.height.saturating_add(grow),
        )
    }

    pub fn to_egui(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin().to_pos2(),
            egui::vec2(self.width as f32, self.height as f32),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} {}x{}]", self.x, self.y, self.width, self.height)
    }
}
