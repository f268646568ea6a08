#![cfg(feature = "cairo-backend")]

use std::fs;

use cairo::{Context, Format, ImageSurface};
use ggraph::api::{FontMetrics, ImageExporter};
use ggraph::controls::ControlId;
use ggraph::core::{ClipRect, SeriesSet, Viewport};
use ggraph::interaction::{Modifiers, PointerButton, PointerEvent};
use ggraph::render::{CairoContextRenderer, CairoRenderer, PangoFontMetrics, PngExporter};
use ggraph::{GraphConfig, GraphServices, GraphViewport, PlotError};

fn series() -> SeriesSet {
    SeriesSet::from_pairs([
        (vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 2.0, 5.0]),
        (vec![0.0, 1.0, 2.0, 3.0], vec![4.0, 2.0, 1.0, 0.5]),
    ])
    .expect("valid series")
}

fn cairo_graph(width: u32, height: u32) -> GraphViewport<CairoRenderer> {
    let renderer = CairoRenderer::new(width as i32, height as i32).expect("renderer");
    GraphViewport::new(
        renderer,
        series(),
        GraphConfig::new(Viewport::new(width, height)).with_worker_threads(1),
        GraphServices::headless(),
    )
    .expect("graph")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_markers_and_controls() {
    let mut graph = cairo_graph(640, 480);
    graph.pointer_enter().expect("enter");
    let stats = graph.renderer().last_stats();
    assert_eq!(stats.markers_drawn, 8);
    assert!(stats.circles_drawn > 0);
    assert!(stats.rects_drawn >= 2);
    assert_eq!(graph.renderer().backend_name(), "cairo+pango+pangocairo");
}

#[test]
fn cairo_renderer_draws_lines_when_enabled() {
    let mut graph = cairo_graph(640, 480);
    let at = graph.control_location(ControlId::Lines).expect("lines control");
    let event = PointerEvent::new(at, PointerButton::Primary, Modifiers::NONE);
    graph.pointer_press(event).expect("press");
    graph.pointer_release(event).expect("release");
    assert!(graph.renderer().last_stats().polylines_drawn >= 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut graph = cairo_graph(600, 320);
    let frame = graph.compose().expect("compose");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    graph
        .renderer_mut()
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");
    assert_eq!(graph.renderer().last_stats().markers_drawn, 8);
}

#[test]
fn pango_metrics_pick_the_largest_fitting_size() {
    let metrics =
        PangoFontMetrics::new("Sans", vec![24.0, 8.0, 12.0]).expect("font metrics");
    let roomy = metrics.fit("moo", 400.0, 200.0).expect("fits");
    assert_eq!(roomy.font_size_px, 24.0);
    let tight = metrics.fit("moo", 400.0, roomy.height() - 1.0).expect("fits");
    assert!(tight.font_size_px < 24.0);
    assert!(metrics.fit("moo", 1.0, 1.0).is_none());

    assert!(matches!(
        PangoFontMetrics::new("Sans", vec![0.0, f64::NAN]),
        Err(PlotError::ResourceUnavailable(_))
    ));
}

#[test]
fn png_exporter_writes_numbered_files() {
    let directory = std::env::temp_dir().join(format!("ggraph-export-{}", std::process::id()));
    fs::create_dir_all(&directory).expect("export directory");

    let mut graph = cairo_graph(320, 240);
    let frame = graph.compose().expect("compose");
    let mut exporter = PngExporter::new(&directory);
    let region = ClipRect::whole(Viewport::new(320, 240));
    let first = exporter.export(&frame, region, "plot").expect("export");
    let second = exporter.export(&frame, region, "plot").expect("export");

    assert_eq!(first.file_name().and_then(|n| n.to_str()), Some("plot-0.png"));
    assert_eq!(second.file_name().and_then(|n| n.to_str()), Some("plot-1.png"));
    let mut file = fs::File::open(&first).expect("png file");
    let image = ImageSurface::create_from_png(&mut file).expect("valid png");
    assert_eq!(image.width(), 320);
    assert_eq!(image.height(), 240);

    fs::remove_dir_all(&directory).expect("cleanup");
}
