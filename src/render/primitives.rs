use crate::core::{LineStyle, PixelPoint};
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Outline color of controls whose action is currently unavailable.
    pub const INACTIVE_GREY: Color = Color::from_hex(0xdd_dd_dd);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from a `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f64 / 255.0,
            ((rgb >> 8) & 0xff) as f64 / 255.0,
            (rgb & 0xff) as f64 / 255.0,
        )
    }

    pub fn validate(self) -> PlotResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels.iter().all(|value| (0.0..=1.0).contains(value)) {
            Ok(())
        } else {
            Err(PlotError::InvalidData(format!("color out of gamut: {self:?}")))
        }
    }
}

/// Marker appearance for one batch of marker centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub outline_width: f64,
    /// Outlined markers are stroked circles; otherwise they are filled discs.
    pub outlined: bool,
    pub color: Color,
}

/// Stroke appearance for one polyline batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineStyle {
    pub width: f64,
    pub line_style: LineStyle,
    pub color: Color,
}

/// One straight line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub stroke_width: f64,
    pub line_style: LineStyle,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: PixelPoint, to: PixelPoint, stroke_width: f64, color: Color) -> Self {
        Self {
            from,
            to,
            stroke_width,
            line_style: LineStyle::Solid,
            color,
        }
    }

    #[must_use]
    pub const fn dashed(mut self) -> Self {
        self.line_style = LineStyle::OnOffDash;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        require_finite("line", &[self.from.x, self.from.y, self.to.x, self.to.y])?;
        if !(self.stroke_width >= 0.0 && self.stroke_width.is_finite()) {
            return Err(PlotError::InvalidData(format!(
                "line stroke width {} is not usable",
                self.stroke_width
            )));
        }
        self.color.validate()
    }
}

/// Circle outline or disc, used for control widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: PixelPoint,
    pub radius: f64,
    pub color: Color,
    pub filled: bool,
    pub stroke_width: f64,
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// One label in pixel space; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        require_finite("label", &[self.x, self.y, self.font_size_px])?;
        if self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "label `{}` has no font size",
                self.text
            )));
        }
        self.color.validate()
    }
}

fn require_finite(what: &str, values: &[f64]) -> PlotResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::InvalidData(format!(
            "{what} has non-finite geometry: {values:?}"
        )))
    }
}
