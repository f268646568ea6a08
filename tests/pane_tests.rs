use ggraph::api::{PaneKind, PlainPane, SelectorPane};
use ggraph::core::{Axis, PixelPoint, SeriesSet, Viewport};
use ggraph::interaction::{Modifiers, PointerButton, PointerEvent};
use ggraph::render::{Color, NullRenderer};
use ggraph::{GraphConfig, GraphServices, GraphViewport, Pane, PlotError, PlotResult, WindowEvent};

fn graph_pane() -> Pane<NullRenderer> {
    let series = SeriesSet::from_pairs([(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])])
        .expect("valid series");
    let graph = GraphViewport::new(
        NullRenderer::default(),
        series,
        GraphConfig::new(Viewport::new(800, 600)).with_worker_threads(1),
        GraphServices::headless(),
    )
    .expect("graph");
    Pane::Graph(Box::new(graph))
}

#[derive(Default)]
struct CountingSelector {
    clicks: usize,
}

impl SelectorPane for CountingSelector {
    fn title(&self) -> &str {
        "cells"
    }

    fn handle(&mut self, event: &WindowEvent) -> PlotResult<bool> {
        if matches!(event, WindowEvent::Press(_)) {
            self.clicks += 1;
            return Ok(true);
        }
        Ok(false)
    }
}

#[test]
fn panes_report_their_kind() {
    let plain: Pane<NullRenderer> =
        Pane::Plain(PlainPane::new(Viewport::new(10, 10), Color::WHITE));
    assert_eq!(plain.kind(), PaneKind::Plain);
    assert!(plain.as_graph().is_none());

    let selector: Pane<NullRenderer> = Pane::Selector(Box::new(CountingSelector::default()));
    assert_eq!(selector.kind(), PaneKind::Selector);

    let graph = graph_pane();
    assert_eq!(graph.kind(), PaneKind::Graph);
    assert!(graph.as_graph().is_some());
}

#[test]
fn plain_pane_tracks_size_and_exposures() {
    let mut pane: Pane<NullRenderer> =
        Pane::Plain(PlainPane::new(Viewport::new(100, 50), Color::BLACK));
    pane.dispatch(WindowEvent::Expose).expect("expose");
    pane.dispatch(WindowEvent::Resize(Viewport::new(200, 80)))
        .expect("resize");
    assert!(matches!(
        pane.dispatch(WindowEvent::Resize(Viewport::new(0, 80))),
        Err(PlotError::InvalidViewport { .. })
    ));

    let Pane::Plain(plain) = &pane else {
        panic!("expected a plain pane");
    };
    assert_eq!(plain.exposures(), 1);
    assert_eq!(plain.viewport(), Viewport::new(200, 80));
    assert_eq!(plain.background(), Color::BLACK);
}

#[test]
fn graph_pane_routes_events_to_the_viewport() {
    let mut pane = graph_pane();
    pane.dispatch(WindowEvent::Expose).expect("expose");
    pane.dispatch(WindowEvent::Enter).expect("enter");

    let at = PixelPoint::new(400.0, 300.0);
    let wheel = PointerEvent::new(at, PointerButton::WheelUp, Modifiers::NONE);
    pane.dispatch(WindowEvent::Press(wheel)).expect("press");
    pane.dispatch(WindowEvent::Release(wheel)).expect("release");

    let graph = pane.as_graph().expect("graph pane");
    assert!(graph.zoomed(Axis::X));
    assert!(graph.renderer().frames_rendered >= 3);
    assert!(graph.interaction().pointer_inside());
}

#[test]
fn selector_pane_receives_events() {
    let mut pane: Pane<NullRenderer> = Pane::Selector(Box::new(CountingSelector::default()));
    pane.dispatch(WindowEvent::Press(PointerEvent::primary(1.0, 1.0)))
        .expect("press");
    pane.dispatch(WindowEvent::Leave).expect("leave");
    let Pane::Selector(selector) = &pane else {
        panic!("expected a selector pane");
    };
    assert_eq!(selector.title(), "cells");
}
