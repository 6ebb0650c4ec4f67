use log::{debug, trace};

use super::Element;
use crate::element::common::BoxGeometry;
use crate::error::ElementResult;
use crate::geometry::{Point, Rect};
use crate::id_generator::{ElementId, generate_id};
use crate::render::RenderSurface;
use crate::text_metrics::TextMeasurer;

/// Image element referencing its pixels by source path
#[derive(Debug)]
pub struct ImageElement {
    id: ElementId,
    geometry: BoxGeometry,
    source: String,
}

impl ImageElement {
    pub fn new(position: Point, width: i32, height: i32, source: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            geometry: BoxGeometry::new(position, width, height),
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn position(&self) -> Point {
        self.geometry.origin
    }

    pub fn width(&self) -> i32 {
        self.geometry.width
    }

    pub fn height(&self) -> i32 {
        self.geometry.height
    }

    pub fn rect(&self) -> Rect {
        self.geometry.rect()
    }
}

impl Element for ImageElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "image"
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.geometry.translate(dx, dy);
        debug!("Moved image {} to {}", self.id, self.geometry.origin);
    }

    fn resize(&mut self, factor: f64) -> ElementResult {
        self.geometry.scale(factor)?;
        debug!(
            "Resized image {} by {} to {}x{}",
            self.id, factor, self.geometry.width, self.geometry.height
        );
        Ok(())
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        trace!("Drawing image {} from {}", self.id, self.source);
        surface.draw_image(self.rect(), &self.source);
    }

    fn contains(&self, point: Point, _measurer: &dyn TextMeasurer) -> bool {
        self.rect().contains(point)
    }

    fn bounds(&self, _measurer: &dyn TextMeasurer) -> Option<Rect> {
        Some(self.rect())
    }
}
