use crate::core::{ClipRect, PixelPoint, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, MarkerStyle, PolylineStyle, TextPrimitive,
};

/// Filled and/or outlined axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub rect: ClipRect,
    pub fill_color: Option<Color>,
    pub border_color: Color,
    pub border_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(rect: ClipRect, color: Color) -> Self {
        Self {
            rect,
            fill_color: Some(color),
            border_color: color,
            border_width: 0.0,
        }
    }

    #[must_use]
    pub const fn outlined(rect: ClipRect, color: Color, border_width: f64) -> Self {
        Self {
            rect,
            fill_color: None,
            border_color: color,
            border_width,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        let ClipRect {
            x,
            y,
            width,
            height,
        } = self.rect;
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return Err(PlotError::InvalidData(
                "rectangle geometry must be finite".to_owned(),
            ));
        }
        if width < 0.0 || height < 0.0 {
            return Err(PlotError::InvalidData(
                "rectangle size must be >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        self.border_color.validate()
    }
}

/// One ordered backend request.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Restricts later commands to a rectangle; `None` lifts the clip.
    Clip(Option<ClipRect>),
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    /// One marker batch, never longer than the backend request cap.
    Markers {
        centers: Vec<PixelPoint>,
        style: MarkerStyle,
    },
    /// One connected polyline chunk, never longer than the backend request cap.
    Polyline {
        vertices: Vec<PixelPoint>,
        style: PolylineStyle,
    },
    Text(TextPrimitive),
}

/// Backend-agnostic, ordered scene for one graph draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn with(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            match command {
                DrawCommand::Rect(rect) => rect.validate()?,
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::Text(text) => text.validate()?,
                DrawCommand::Circle(circle) => circle.color.validate()?,
                DrawCommand::Markers { style, .. } => style.color.validate()?,
                DrawCommand::Polyline { style, .. } => style.color.validate()?,
                DrawCommand::Clip(_) => {}
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn marker_batches(&self) -> impl Iterator<Item = (&[PixelPoint], &MarkerStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Markers { centers, style } => Some((centers.as_slice(), style)),
            _ => None,
        })
    }

    pub fn polyline_batches(&self) -> impl Iterator<Item = (&[PixelPoint], &PolylineStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline { vertices, style } => Some((vertices.as_slice(), style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }
}
