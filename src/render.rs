use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};

use crate::geometry::{Point, Rect};
use crate::text_metrics::ASCENT_RATIO;

/// External drawing destination.
///
/// Elements describe what to draw; the surface owns pixels, fonts and devices.
/// Drawing is fire-and-forget: the model never inspects the result.
pub trait RenderSurface {
    /// Draw `text` with its baseline starting at `position`
    fn draw_text(&mut self, position: Point, text: &str, size: f64);

    fn draw_image(&mut self, bounds: Rect, source: &str);

    fn draw_chart(&mut self, bounds: Rect, title: &str);

    /// Outline marking the current selection
    fn highlight(&mut self, bounds: Rect);
}

/// A single draw request as received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        position: Point,
        text: String,
        size: f64,
    },
    Image {
        bounds: Rect,
        source: String,
    },
    Chart {
        bounds: Rect,
        title: String,
    },
    Highlight {
        bounds: Rect,
    },
}

/// Surface that keeps every request in order instead of drawing it
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_text(&mut self, position: Point, text: &str, size: f64) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            size,
        });
    }

    fn draw_image(&mut self, bounds: Rect, source: &str) {
        self.commands.push(DrawCommand::Image {
            bounds,
            source: source.to_owned(),
        });
    }

    fn draw_chart(&mut self, bounds: Rect, title: &str) {
        self.commands.push(DrawCommand::Chart {
            bounds,
            title: title.to_owned(),
        });
    }

    fn highlight(&mut self, bounds: Rect) {
        self.commands.push(DrawCommand::Highlight { bounds });
    }
}

const LABEL_SIZE: f32 = 12.0;
const CHART_BARS: [f32; 4] = [0.45, 0.8, 0.6, 0.95];

/// Draws through an egui painter, offsetting document coordinates by `origin`
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, bounds: Rect) -> egui::Rect {
        bounds.to_egui().translate(self.origin.to_vec2())
    }
}

impl RenderSurface for EguiSurface<'_> {
    fn draw_text(&mut self, position: Point, text: &str, size: f64) {
        let top_left = self.origin + position.to_pos2().to_vec2()
            - egui::vec2(0.0, (size * ASCENT_RATIO).round() as f32);
        self.painter.text(
            top_left,
            Align2::LEFT_TOP,
            text,
            FontId::proportional(size as f32),
            Color32::BLACK,
        );
    }

    fn draw_image(&mut self, bounds: Rect, source: &str) {
        let rect = self.to_screen(bounds);
        self.painter.rect_filled(rect, 0.0, Color32::from_gray(200));
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(100)));
        self.painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            source,
            FontId::proportional(LABEL_SIZE),
            Color32::from_gray(60),
        );
    }

    fn draw_chart(&mut self, bounds: Rect, title: &str) {
        let rect = self.to_screen(bounds);
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::DARK_GRAY));

        let bar_width = rect.width() / (CHART_BARS.len() * 2 + 1) as f32;
        for (i, ratio) in CHART_BARS.iter().enumerate() {
            let left = rect.left() + bar_width * (2 * i + 1) as f32;
            let bar = egui::Rect::from_min_max(
                egui::pos2(left, rect.bottom() - rect.height() * ratio * 0.8),
                egui::pos2(left + bar_width, rect.bottom()),
            );
            self.painter.rect_filled(bar, 0.0, Color32::from_rgb(90, 140, 200));
        }

        self.painter.text(
            rect.center_top() + egui::vec2(0.0, 4.0),
            Align2::CENTER_TOP,
            title,
            FontId::proportional(LABEL_SIZE),
            Color32::BLACK,
        );
    }

    fn highlight(&mut self, bounds: Rect) {
        let rect = self.to_screen(bounds);
        self.painter
            .rect_stroke(rect, 2.0, Stroke::new(1.5, Color32::from_rgb(30, 120, 255)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_keeps_order() {
        let mut surface = RecordingSurface::new();
        surface.draw_text(Point::new(1, 2), "a", 10.0);
        surface.draw_image(Rect::new(0, 0, 5, 5), "logo.png");
        surface.highlight(Rect::new(0, 0, 1, 1));

        assert_eq!(surface.commands().len(), 3);
        assert!(matches!(surface.commands()[0], DrawCommand::Text { .. }));
        assert!(matches!(surface.commands()[2], DrawCommand::Highlight { .. }));

        surface.clear();
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_egui_surface_basics() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |_| {});

        let layer_id = egui::LayerId::background();
        let clip = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(500.0, 500.0));
        let painter = Painter::new(ctx.clone(), layer_id, clip);

        let mut surface = EguiSurface::new(&painter, egui::pos2(10.0, 10.0));
        surface.draw_text(Point::new(50, 50), "Click to edit", 24.0);
        surface.draw_image(Rect::new(300, 20, 100, 50), "logo.png");
        surface.draw_chart(Rect::new(50, 150, 400, 300), "Sales Data");
        surface.highlight(Rect::new(48, 30, 160, 30));

        assert_eq!(
            surface.to_screen(Rect::new(0, 0, 10, 10)).min,
            egui::pos2(10.0, 10.0)
        );
    }
}
