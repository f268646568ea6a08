use std::path::PathBuf;

use crate::core::ClipRect;
use crate::error::PlotResult;
use crate::interaction::PointerEvent;
use crate::render::{Palette, RenderFrame};

/// Font chosen to fit a string in a pixel box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFit {
    pub font_size_px: f64,
    pub text_width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl FontFit {
    /// Baseline that vertically centers the text on `y`.
    #[must_use]
    pub fn centered_baseline(&self, y: f64) -> f64 {
        y + (self.ascent - self.descent) / 2.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Font metrics collaborator.
pub trait FontMetrics {
    /// Largest registered font for which `text` fits in the box, or `None`
    /// when even the smallest one does not.
    fn fit(&self, text: &str, max_width: f64, max_height: f64) -> Option<FontFit>;
}

/// Deterministic monospace metrics for headless use and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedFontMetrics {
    sizes: Vec<f64>,
    advance_ratio: f64,
}

impl Default for FixedFontMetrics {
    fn default() -> Self {
        Self {
            sizes: vec![6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0],
            advance_ratio: 0.6,
        }
    }
}

impl FixedFontMetrics {
    /// `sizes` are candidate pixel sizes; order does not matter.
    #[must_use]
    pub fn new(mut sizes: Vec<f64>, advance_ratio: f64) -> Self {
        sizes.retain(|size| size.is_finite() && *size > 0.0);
        sizes.sort_by(f64::total_cmp);
        Self {
            sizes,
            advance_ratio,
        }
    }

    fn measure(&self, text: &str, size: f64) -> FontFit {
        FontFit {
            font_size_px: size,
            text_width: text.chars().count() as f64 * size * self.advance_ratio,
            ascent: 0.8 * size,
            descent: 0.2 * size,
        }
    }
}

impl FontMetrics for FixedFontMetrics {
    fn fit(&self, text: &str, max_width: f64, max_height: f64) -> Option<FontFit> {
        self.sizes
            .iter()
            .rev()
            .map(|&size| self.measure(text, size))
            .find(|fit| fit.text_width <= max_width && fit.height() <= max_height)
    }
}

/// Color chooser collaborator, opened on a series control.
pub trait ColorChooser {
    /// Returns the palette index picked for `series`, or `None` if the user
    /// cancelled.
    fn choose(&mut self, series: usize, current: usize, palette: &Palette) -> Option<usize>;
}

/// Image export collaborator.
pub trait ImageExporter {
    /// Writes `region` of the drawn `frame` to disk and returns the path.
    fn export(&mut self, frame: &RenderFrame, region: ClipRect, base_name: &str)
    -> PlotResult<PathBuf>;
}

/// Non-blocking source of pointer input, polled once per movie frame.
pub trait EventPoll {
    /// Next completed click (press then release) since the last call.
    fn next_click(&mut self) -> Option<PointerEvent>;
}

/// Optional collaborators of a graph viewport.
#[derive(Default)]
pub struct GraphServices {
    pub fonts: Option<Box<dyn FontMetrics>>,
    pub color_chooser: Option<Box<dyn ColorChooser>>,
    pub exporter: Option<Box<dyn ImageExporter>>,
    pub event_poll: Option<Box<dyn EventPoll>>,
}

impl GraphServices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Headless services: fixed font metrics and nothing else.
    #[must_use]
    pub fn headless() -> Self {
        Self::new().with_fonts(FixedFontMetrics::default())
    }

    #[must_use]
    pub fn with_fonts(mut self, fonts: impl FontMetrics + 'static) -> Self {
        self.fonts = Some(Box::new(fonts));
        self
    }

    #[must_use]
    pub fn with_color_chooser(mut self, chooser: impl ColorChooser + 'static) -> Self {
        self.color_chooser = Some(Box::new(chooser));
        self
    }

    #[must_use]
    pub fn with_exporter(mut self, exporter: impl ImageExporter + 'static) -> Self {
        self.exporter = Some(Box::new(exporter));
        self
    }

    #[must_use]
    pub fn with_event_poll(mut self, poll: impl EventPoll + 'static) -> Self {
        self.event_poll = Some(Box::new(poll));
        self
    }
}

impl std::fmt::Debug for GraphServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphServices")
            .field("fonts", &self.fonts.is_some())
            .field("color_chooser", &self.color_chooser.is_some())
            .field("exporter", &self.exporter.is_some())
            .field("event_poll", &self.event_poll.is_some())
            .finish()
    }
}
