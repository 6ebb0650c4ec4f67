//! Text measurement used by text hit-testing.
//!
//! The core never measures text itself. A [`TextMeasurer`] is handed to every
//! containment query, so hit-test accuracy for text is exactly as good as the
//! measurer in use.

/// Pixel metrics for a single line of text at a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub width: i32,
    pub height: i32,
    /// Distance from the top of the line box down to the baseline
    pub ascent: i32,
}

/// External font-metrics service
pub trait TextMeasurer {
    fn measure(&self, text: &str, size: f64) -> TextMetrics;
}

/// Portion of the font size above the baseline, for measurers without real font data
pub const ASCENT_RATIO: f64 = 0.8;

/// Deterministic measurer that treats every glyph as the same width.
///
/// Useful headless and in tests, where the real font system is unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f64,
    pub line_height_ratio: f64,
    pub ascent_ratio: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
            ascent_ratio: ASCENT_RATIO,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, size: f64) -> TextMetrics {
        let glyphs = text.chars().count() as f64;
        TextMetrics {
            width: (glyphs * size * self.advance_ratio).round() as i32,
            height: (size * self.line_height_ratio).round() as i32,
            ascent: (size * self.ascent_ratio).round() as i32,
        }
    }
}

/// Measures text with egui's proportional font.
///
/// egui only loads fonts during the first `Context::run`, so this must not be
/// queried before the first frame.
#[derive(Debug, Clone)]
pub struct EguiMeasurer {
    ctx: egui::Context,
}

impl EguiMeasurer {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasurer for EguiMeasurer {
    fn measure(&self, text: &str, size: f64) -> TextMetrics {
        let font_id = egui::FontId::proportional(size as f32);
        let galley_size = self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), font_id, egui::Color32::BLACK)
                .size()
        });
        TextMetrics {
            width: galley_size.x.round() as i32,
            height: galley_size.y.round() as i32,
            ascent: (size * ASCENT_RATIO).round() as i32,
        }
    }
}
