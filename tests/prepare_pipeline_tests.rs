use approx::assert_relative_eq;
use ggraph::core::{
    Axis, AxisRange, AxisSelection, CoordinateTransform, DataPoint, LineStyle, LogAxes,
    PixelPoint, PlotBounds, RangeModel, SeriesSet, Viewport,
};
use ggraph::render::{
    Color, DrawBatcher, DrawCommand, DrawFlags, MarkerStyle, PolylineStyle, PreparePool,
    RenderBatch, RenderFrame, SeriesPaint, extended_range, prepare_series,
};

const BOTH: DrawFlags = DrawFlags {
    markers: true,
    lines: true,
};
const LINES: DrawFlags = DrawFlags {
    markers: false,
    lines: true,
};

fn transform() -> CoordinateTransform {
    let mut ranges = RangeModel::default();
    ranges.install_max_range(
        AxisSelection::Both,
        [
            Some(AxisRange::new(0.0, 10.0)),
            Some(AxisRange::new(0.0, 10.0)),
        ],
    );
    CoordinateTransform::new(PlotBounds::from_viewport(Viewport::new(800, 600)), &ranges)
}

fn single(x: Vec<f64>, y: Vec<f64>) -> SeriesSet {
    SeriesSet::from_pairs([(x, y)]).expect("valid series")
}

fn assert_pixel(actual: PixelPoint, expected: PixelPoint) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
}

fn paint(flags: DrawFlags) -> SeriesPaint {
    SeriesPaint {
        flags,
        marker: MarkerStyle {
            radius: 4.0,
            outline_width: 2.0,
            outlined: false,
            color: Color::BLACK,
        },
        line: PolylineStyle {
            width: 4.0,
            line_style: LineStyle::Solid,
            color: Color::BLACK,
        },
    }
}

#[test]
fn markers_only_for_points_inside_the_view() {
    let t = transform();
    let set = single(vec![-1.0, 2.0, 5.0, 11.0], vec![5.0, 5.0, 20.0, 5.0]);
    let view = set.view(0, LogAxes::default());
    let batch = prepare_series(view, &t, extended_range(&t, 0.0), BOTH);
    assert_eq!(batch.markers, vec![t.coord_point(DataPoint::new(2.0, 5.0))]);
}

#[test]
fn lines_are_clipped_at_the_vertical_edges() {
    let t = transform();
    let set = single(vec![-5.0, 5.0, 15.0], vec![5.0, 5.0, 5.0]);
    let batch = prepare_series(
        set.view(0, LogAxes::default()),
        &t,
        extended_range(&t, 0.0),
        LINES,
    );
    assert!(batch.markers.is_empty());
    assert_eq!(batch.vertices.len(), 3);
    assert_pixel(batch.vertices[0], PixelPoint::new(30.0, 300.0));
    assert_pixel(batch.vertices[1], PixelPoint::new(400.0, 300.0));
    assert_pixel(batch.vertices[2], PixelPoint::new(770.0, 300.0));
}

#[test]
fn lines_leaving_through_the_top_end_on_the_edge() {
    let t = transform();
    let set = single(vec![1.0, 2.0], vec![5.0, 15.0]);
    let batch = prepare_series(
        set.view(0, LogAxes::default()),
        &t,
        extended_range(&t, 0.0),
        LINES,
    );
    assert_eq!(batch.vertices.len(), 2);
    assert_pixel(batch.vertices[0], t.coord_point(DataPoint::new(1.0, 5.0)));
    assert_pixel(batch.vertices[1], t.coord_point(DataPoint::new(1.5, 10.0)));
}

#[test]
fn non_finite_points_are_skipped() {
    let t = transform();
    let set = single(vec![1.0, f64::NAN, 3.0], vec![1.0, 2.0, f64::INFINITY]);
    let batch = prepare_series(
        set.view(0, LogAxes::default()),
        &t,
        extended_range(&t, 0.0),
        BOTH,
    );
    assert_eq!(batch.markers.len(), 1);
    assert_eq!(batch.vertices.len(), 1);
}

#[test]
fn hidden_series_prepare_nothing() {
    let t = transform();
    let set = single(vec![1.0, 2.0], vec![1.0, 2.0]);
    let batch = prepare_series(
        set.view(0, LogAxes::default()),
        &t,
        extended_range(&t, 4.0),
        DrawFlags::HIDDEN,
    );
    assert!(batch.is_empty());
}

#[test]
fn extended_range_widens_by_the_line_width() {
    let t = transform();
    let [x, y] = extended_range(&t, 74.0);
    assert_relative_eq!(x.low(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(x.high(), 11.0, epsilon = 1e-12);
    assert_relative_eq!(y.low(), -74.0 / 54.0, epsilon = 1e-12);
}

#[test]
fn pool_output_is_deterministic_and_index_ordered() {
    let t = transform();
    let set = SeriesSet::from_pairs([
        (vec![1.0, 2.0, 3.0], vec![1.0, 4.0, 9.0]),
        (vec![1.0, 2.0, 3.0], vec![2.0, 2.0, 2.0]),
        (vec![1.0, 2.0, 3.0], vec![3.0, 1.0, 0.5]),
    ])
    .expect("valid series");
    let pool = PreparePool::new(Some(2)).expect("pool");
    assert_eq!(pool.threads(), 2);

    let flags = [BOTH, DrawFlags::HIDDEN];
    let first = pool.prepare(&set, LogAxes::default(), &t, 4.0, &flags);
    let second = pool.prepare(&set, LogAxes::default(), &t, 4.0, &flags);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].markers.len(), 3);
    // Series without flags read as hidden.
    assert!(first[1].is_empty());
    assert!(first[2].is_empty());
}

#[test]
fn log_axes_drop_non_positive_values() {
    let t = transform();
    let set = single(vec![0.0, 10.0, 100.0], vec![1.0, 1.0, 1.0]);
    let pool = PreparePool::new(Some(1)).expect("pool");
    let batches = pool.prepare(&set, LogAxes { x: true, y: false }, &t, 0.0, &[BOTH]);
    assert_eq!(
        batches[0].markers,
        vec![
            t.coord_point(DataPoint::new(1.0, 1.0)),
            t.coord_point(DataPoint::new(2.0, 1.0)),
        ]
    );
}

#[test]
fn batcher_splits_markers_into_request_sized_blocks() {
    let batcher = DrawBatcher::new(10);
    assert_eq!(batcher.marker_block(), 3);
    assert_eq!(batcher.line_block(), 5);

    let batch = RenderBatch {
        markers: (0..7_u32).map(|i| PixelPoint::new(f64::from(i), 0.0)).collect(),
        vertices: Vec::new(),
    };
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    let stats = batcher.emit(&mut frame, &[batch], &[0], |_| paint(BOTH));
    assert_eq!(stats.marker_requests, 3);
    assert_eq!(stats.markers, 7);
    let sizes: Vec<usize> = frame
        .marker_batches()
        .map(|(centers, _)| centers.len())
        .collect();
    assert_eq!(sizes, vec![3, 3, 1]);
}

#[test]
fn polyline_chunks_share_their_boundary_vertex() {
    let batcher = DrawBatcher::new(10);
    let batch = RenderBatch {
        markers: Vec::new(),
        vertices: (0..9_u32).map(|i| PixelPoint::new(f64::from(i), 1.0)).collect(),
    };
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    let stats = batcher.emit(&mut frame, &[batch], &[0], |_| paint(LINES));
    assert_eq!(stats.polyline_requests, 2);

    let chunks: Vec<&[PixelPoint]> = frame.polyline_batches().map(|(v, _)| v).collect();
    assert_eq!(chunks[0].len(), 5);
    assert_eq!(chunks[1].len(), 5);
    assert_eq!(chunks[0].last(), chunks[1].first());
}

#[test]
fn batcher_follows_the_series_order() {
    let batcher = DrawBatcher::new(300);
    let batches = [
        RenderBatch {
            markers: vec![PixelPoint::new(0.0, 0.0)],
            vertices: Vec::new(),
        },
        RenderBatch {
            markers: vec![PixelPoint::new(1.0, 1.0)],
            vertices: Vec::new(),
        },
    ];
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    batcher.emit(&mut frame, &batches, &[1, 0], |_| paint(BOTH));
    let firsts: Vec<f64> = frame
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Markers { centers, .. } => Some(centers[0].x),
            _ => None,
        })
        .collect();
    assert_eq!(firsts, vec![1.0, 0.0]);
}

#[test]
fn series_view_slices_outlive_the_view() {
    let series = SeriesSet::from_pairs([
        (vec![1.0, 10.0], vec![2.0, 3.0]),
        (vec![100.0, 1000.0], vec![4.0, 5.0]),
    ])
    .expect("valid series");
    let linear: Vec<&[f64]> = (0..series.len())
        .map(|index| series.view(index, LogAxes::default()).values(Axis::X))
        .collect();
    assert_eq!(linear, vec![&[1.0, 10.0][..], &[100.0, 1000.0][..]]);

    let mut log = LogAxes::default();
    log.set(Axis::X, true);
    let logged: Vec<&[f64]> = (0..series.len())
        .map(|index| series.view(index, log).values(Axis::X))
        .collect();
    assert_relative_eq!(logged[0][1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(logged[1][1], 3.0, epsilon = 1e-12);
}
