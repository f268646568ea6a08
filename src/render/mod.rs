mod batcher;
mod frame;
mod null_renderer;
mod palette;
mod prepare;
mod primitives;

pub use batcher::{BatchStats, DrawBatcher, SeriesPaint};
pub use frame::{DrawCommand, RectPrimitive, RenderFrame};
pub use null_renderer::NullRenderer;
pub use palette::Palette;
pub use prepare::{
    DrawFlags, PreparePool, RenderBatch, extended_range, prepare_series,
};
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, MarkerStyle, PolylineStyle, TextHAlign, TextPrimitive,
};

use crate::error::PlotResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, ordered `RenderFrame` so drawing
/// code stays isolated from graph state and interaction logic. Marker and
/// polyline commands are already sliced to the configured request cap.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoFontMetrics, PngExporter,
};
