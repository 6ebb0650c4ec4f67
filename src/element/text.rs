use log::{debug, trace};

use super::Element;
use crate::element::common;
use crate::error::{ElementError, ElementResult};
use crate::geometry::{Point, Rect};
use crate::id_generator::{ElementId, generate_id};
use crate::render::RenderSurface;
use crate::text_metrics::TextMeasurer;

/// A single line of editable text.
///
/// `position` is the start of the baseline, matching how text is drawn. The
/// hit-test box therefore extends `ascent` above it.
#[derive(Debug)]
pub struct TextElement {
    id: ElementId,
    position: Point,
    content: String,
    size: f64,
}

impl TextElement {
    pub fn new(position: Point, content: impl Into<String>, size: f64) -> ElementResult<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(ElementError::InvalidTextSize(size));
        }
        Ok(Self {
            id: generate_id(),
            position,
            content: content.into(),
            size,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        debug!("Text {} content set to '{}'", self.id, self.content);
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Size after scaling by `factor`, or an error if it would leave the positive finite range
    pub(crate) fn scaled_size(&self, factor: f64) -> ElementResult<f64> {
        common::validate_factor(factor)?;
        let scaled = self.size * factor;
        if scaled.is_finite() && scaled > 0.0 {
            Ok(scaled)
        } else {
            Err(ElementError::InvalidTextSize(scaled))
        }
    }
}

impl Element for TextElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "text"
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = self.position.translated(dx, dy);
        debug!("Moved text {} to {} ('{}')", self.id, self.position, self.content);
    }

    fn resize(&mut self, factor: f64) -> ElementResult {
        self.size = self.scaled_size(factor)?;
        debug!("Resized text {} by {} to size {}", self.id, factor, self.size);
        Ok(())
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        trace!("Drawing text {} at {}", self.id, self.position);
        surface.draw_text(self.position, &self.content, self.size);
    }

    fn contains(&self, point: Point, measurer: &dyn TextMeasurer) -> bool {
        let hit = self
            .bounds(measurer)
            .is_some_and(|bounds| bounds.contains(point));
        trace!("Point {} {} text {}", point, if hit { "inside" } else { "outside" }, self.id);
        hit
    }

    fn bounds(&self, measurer: &dyn TextMeasurer) -> Option<Rect> {
        let metrics = measurer.measure(&self.content, self.size);
        Some(Rect::new(
            self.position.x,
            self.position.y.saturating_sub(metrics.ascent),
            metrics.width,
            metrics.height,
        ))
    }

    fn as_editable_text(&self) -> Option<&TextElement> {
        Some(self)
    }

    fn as_editable_text_mut(&mut self) -> Option<&mut TextElement> {
        Some(self)
    }
}
