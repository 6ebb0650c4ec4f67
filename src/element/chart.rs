use log::{debug, trace};

use super::Element;
use crate::element::common::BoxGeometry;
use crate::error::ElementResult;
use crate::geometry::{Point, Rect};
use crate::id_generator::{ElementId, generate_id};
use crate::render::RenderSurface;
use crate::text_metrics::TextMeasurer;

/// Titled chart occupying a fixed rectangle
#[derive(Debug)]
pub struct ChartElement {
    id: ElementId,
    geometry: BoxGeometry,
    title: String,
}

impl ChartElement {
    pub fn new(position: Point, width: i32, height: i32, title: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            geometry: BoxGeometry::new(position, width, height),
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
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

impl Element for ChartElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "chart"
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.geometry.translate(dx, dy);
        debug!("Moved chart '{}' to {}", self.title, self.geometry.origin);
    }

    fn resize(&mut self, factor: f64) -> ElementResult {
        self.geometry.scale(factor)?;
        debug!(
            "Resized chart '{}' by {} to {}x{}",
            self.title, factor, self.geometry.width, self.geometry.height
        );
        Ok(())
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        trace!("Drawing chart '{}'", self.title);
        surface.draw_chart(self.rect(), &self.title);
    }

    fn contains(&self, point: Point, _measurer: &dyn TextMeasurer) -> bool {
        self.rect().contains(point)
    }

    fn bounds(&self, _measurer: &dyn TextMeasurer) -> Option<Rect> {
        Some(self.rect())
    }
}
