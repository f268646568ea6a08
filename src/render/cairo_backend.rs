use std::f64::consts::TAU;
use std::fs::File;
use std::path::PathBuf;

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;
use tracing::debug;

use crate::api::{FontFit, FontMetrics, ImageExporter};
use crate::core::{ClipRect, LineStyle, PixelPoint};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    CirclePrimitive, Color, DrawCommand, LinePrimitive, MarkerStyle, PolylineStyle,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const DEFAULT_FONT_FAMILY: &str = "Sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub marker_batches: usize,
    pub markers_drawn: usize,
    pub polylines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> PlotResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen into an image surface through `Renderer::render`, or
/// in place on an external Cairo context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        context.set_line_cap(LineCap::Round);
        context.set_line_join(LineJoin::Round);
        let mut stats = CairoRenderStats::default();

        for command in &frame.commands {
            match command {
                DrawCommand::Clip(Some(rect)) => {
                    context.reset_clip();
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    context.clip();
                }
                DrawCommand::Clip(None) => context.reset_clip(),
                DrawCommand::Rect(rect) => {
                    draw_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::Line(line) => {
                    draw_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Circle(circle) => {
                    draw_circle(context, *circle)?;
                    stats.circles_drawn += 1;
                }
                DrawCommand::Markers { centers, style } => {
                    draw_markers(context, centers, *style)?;
                    stats.marker_batches += 1;
                    stats.markers_drawn += centers.len();
                }
                DrawCommand::Polyline { vertices, style } => {
                    draw_polyline(context, vertices, *style)?;
                    stats.polylines_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    draw_text(context, &self.font_family, text);
                    stats.texts_drawn += 1;
                }
            }
        }
        context.reset_clip();

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_dash(context: &Context, style: LineStyle, width: f64) {
    let unit = width.max(1.0);
    match style {
        LineStyle::Solid => context.set_dash(&[], 0.0),
        LineStyle::OnOffDash => context.set_dash(&[2.0 * unit, 2.0 * unit], 0.0),
        LineStyle::DoubleDash => context.set_dash(&[3.0 * unit, unit, unit, unit], 0.0),
    }
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> PlotResult<()> {
    let ClipRect {
        x,
        y,
        width,
        height,
    } = rect.rect;
    context.rectangle(x, y, width, height);
    if let Some(fill) = rect.fill_color {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    }
    if rect.border_width > 0.0 {
        apply_color(context, rect.border_color);
        apply_dash(context, LineStyle::Solid, rect.border_width);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
    } else {
        context.new_path();
    }
    Ok(())
}

fn draw_line(context: &Context, line: LinePrimitive) -> PlotResult<()> {
    apply_color(context, line.color);
    apply_dash(context, line.line_style, line.stroke_width);
    context.set_line_width(line.stroke_width);
    context.move_to(line.from.x, line.from.y);
    context.line_to(line.to.x, line.to.y);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> PlotResult<()> {
    apply_color(context, circle.color);
    context.new_sub_path();
    context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
    if circle.filled {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))
    } else {
        apply_dash(context, LineStyle::Solid, circle.stroke_width);
        context.set_line_width(circle.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))
    }
}

fn draw_markers(context: &Context, centers: &[PixelPoint], style: MarkerStyle) -> PlotResult<()> {
    apply_color(context, style.color);
    for center in centers {
        context.new_sub_path();
        context.arc(center.x, center.y, style.radius, 0.0, TAU);
    }
    if style.outlined {
        apply_dash(context, LineStyle::Solid, style.outline_width);
        context.set_line_width(style.outline_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke markers", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill markers", err))
    }
}

fn draw_polyline(
    context: &Context,
    vertices: &[PixelPoint],
    style: PolylineStyle,
) -> PlotResult<()> {
    let Some((first, rest)) = vertices.split_first() else {
        return Ok(());
    };
    apply_color(context, style.color);
    apply_dash(context, style.line_style, style.width);
    context.set_line_width(style.width);
    context.move_to(first.x, first.y);
    for vertex in rest {
        context.line_to(vertex.x, vertex.y);
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err))
}

fn draw_text(context: &Context, family: &str, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("{family} {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y - baseline);
    pangocairo::functions::show_layout(context, &layout);
}

/// Pango font metrics over a fixed list of candidate sizes.
#[derive(Debug)]
pub struct PangoFontMetrics {
    context: Context,
    family: String,
    sizes: Vec<f64>,
}

impl PangoFontMetrics {
    /// `sizes` are candidate font sizes; order does not matter.
    pub fn new(family: impl Into<String>, mut sizes: Vec<f64>) -> PlotResult<Self> {
        sizes.retain(|size| size.is_finite() && *size > 0.0);
        if sizes.is_empty() {
            return Err(PlotError::ResourceUnavailable(
                "no usable font size registered".to_owned(),
            ));
        }
        sizes.sort_by(f64::total_cmp);
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measuring surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measuring context", err))?;
        Ok(Self {
            context,
            family: family.into(),
            sizes,
        })
    }

    fn measure(&self, text: &str, size: f64) -> FontFit {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("{} {size}", self.family));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        FontFit {
            font_size_px: size,
            text_width: f64::from(width),
            ascent,
            descent: f64::from(height) - ascent,
        }
    }
}

impl FontMetrics for PangoFontMetrics {
    fn fit(&self, text: &str, max_width: f64, max_height: f64) -> Option<FontFit> {
        self.sizes
            .iter()
            .rev()
            .map(|&size| self.measure(text, size))
            .find(|fit| fit.text_width <= max_width && fit.height() <= max_height)
    }
}

/// Writes exported regions as numbered PNG files in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngExporter {
    directory: PathBuf,
}

impl PngExporter {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// First `<base>-<n>.png` in the directory that does not exist yet.
    fn next_path(&self, base_name: &str) -> PathBuf {
        let mut index = 0usize;
        loop {
            let candidate = self.directory.join(format!("{base_name}-{index}.png"));
            if !candidate.exists() {
                return candidate;
            }
            index += 1;
        }
    }
}

impl ImageExporter for PngExporter {
    fn export(
        &mut self,
        frame: &RenderFrame,
        region: ClipRect,
        base_name: &str,
    ) -> PlotResult<PathBuf> {
        let width = i32::try_from(frame.viewport.width)
            .map_err(|_| PlotError::Backend("viewport too wide for cairo".to_owned()))?;
        let height = i32::try_from(frame.viewport.height)
            .map_err(|_| PlotError::Backend("viewport too tall for cairo".to_owned()))?;
        let mut renderer = CairoRenderer::new(width, height)?;
        renderer.render(frame)?;

        // Region sizes are whole pixels of the window.
        let region_width = region.width.round().max(1.0) as i32;
        let region_height = region.height.round().max(1.0) as i32;
        let cropped = ImageSurface::create(Format::ARgb32, region_width, region_height)
            .map_err(|err| map_backend_error("failed to create export surface", err))?;
        let context = Context::new(&cropped)
            .map_err(|err| map_backend_error("failed to create export context", err))?;
        context
            .set_source_surface(renderer.surface(), -region.x, -region.y)
            .map_err(|err| map_backend_error("failed to set export source", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to copy export region", err))?;
        drop(context);

        let path = self.next_path(base_name);
        let mut file = File::create(&path).map_err(|err| {
            PlotError::Backend(format!("failed to create {}: {err}", path.display()))
        })?;
        cropped.write_to_png(&mut file).map_err(|err| {
            PlotError::Backend(format!("failed to write {}: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "png exported");
        Ok(path)
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
