use std::num::NonZeroUsize;
use std::thread;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};

use crate::core::{
    Axis, AxisRange, CoordinateTransform, DataPoint, LogAxes, PixelPoint, SeriesSet, SeriesView,
};
use crate::error::{PlotError, PlotResult};

/// Drawable geometry of one series for the current view.
///
/// Replaced wholesale on every prepare pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBatch {
    pub markers: Vec<PixelPoint>,
    pub vertices: Vec<PixelPoint>,
}

impl RenderBatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.vertices.is_empty()
    }
}

/// What a prepare pass should emit for one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawFlags {
    pub markers: bool,
    pub lines: bool,
}

impl DrawFlags {
    pub const HIDDEN: DrawFlags = DrawFlags {
        markers: false,
        lines: false,
    };

    #[must_use]
    pub fn is_hidden(self) -> bool {
        !self.markers && !self.lines
    }
}

/// Bounded worker pool for the prepare pass.
#[derive(Debug)]
pub struct PreparePool {
    pool: ThreadPool,
}

impl PreparePool {
    /// Builds a pool of `threads` workers, or one per available core.
    pub fn new(threads: Option<usize>) -> PlotResult<Self> {
        let threads = threads
            .filter(|count| *count > 0)
            .unwrap_or_else(|| thread::available_parallelism().map_or(1, NonZeroUsize::get));
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("ggraph-prepare-{index}"))
            .build()
            .map_err(|err| {
                PlotError::ResourceUnavailable(format!("failed to start prepare workers: {err}"))
            })?;
        debug!(threads, "prepare pool started");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Computes one batch per series, in series index order.
    ///
    /// Each worker reads shared series data and owns its output slot; the
    /// call returns only when every series is done.
    pub fn prepare(
        &self,
        series: &SeriesSet,
        log_axes: LogAxes,
        transform: &CoordinateTransform,
        line_width_px: f64,
        flags: &[DrawFlags],
    ) -> Vec<RenderBatch> {
        series.prepare_log(log_axes);
        let extended = extended_range(transform, line_width_px);
        let batches: Vec<RenderBatch> = self.pool.install(|| {
            (0..series.len())
                .into_par_iter()
                .map(|index| {
                    let flags = flags.get(index).copied().unwrap_or(DrawFlags::HIDDEN);
                    prepare_series(series.view(index, log_axes), transform, extended, flags)
                })
                .collect()
        });
        trace!(
            series = batches.len(),
            markers = batches.iter().map(|batch| batch.markers.len()).sum::<usize>(),
            vertices = batches.iter().map(|batch| batch.vertices.len()).sum::<usize>(),
            "prepare pass finished"
        );
        batches
    }
}

/// Current range widened by one line width on each side, in data units.
#[must_use]
pub fn extended_range(transform: &CoordinateTransform, line_width_px: f64) -> [AxisRange; 2] {
    Axis::BOTH.map(|axis| {
        let pad = transform.pixels_to_units(axis, line_width_px.max(0.0));
        transform.range(axis).expanded(pad)
    })
}

/// Geometry of one series. Lines assume `x` is non-decreasing.
#[must_use]
pub fn prepare_series(
    view: SeriesView<'_>,
    transform: &CoordinateTransform,
    extended: [AxisRange; 2],
    flags: DrawFlags,
) -> RenderBatch {
    let mut batch = RenderBatch::default();
    if flags.is_hidden() {
        return batch;
    }

    let [range_x, range_y] = [transform.range(Axis::X), transform.range(Axis::Y)];
    let [ext_x, ext_y] = extended;
    let mut lines_open = flags.lines;

    for index in 0..view.len() {
        let point = DataPoint::new(view.x[index], view.y[index]);
        if !point.is_finite() {
            continue;
        }
        if flags.markers && range_x.contains(point.x) && range_y.contains(point.y) {
            batch.markers.push(transform.coord_point(point));
        }
        if !lines_open || point.x < ext_x.low() {
            continue;
        }
        if index > 0 {
            let last = DataPoint::new(view.x[index - 1], view.y[index - 1]);
            if last.x > ext_x.high() {
                lines_open = false;
                if !flags.markers {
                    break;
                }
                continue;
            }
            push_crossings(&mut batch.vertices, transform, extended, last, point);
        }
        if ext_x.contains(point.x) && ext_y.contains(point.y) {
            batch.vertices.push(transform.coord_point(point));
        }
    }
    batch
}

/// Pushes the synthetic vertices where the segment `last -> point` crosses
/// the extended range edges, ordered along increasing x.
fn push_crossings(
    out: &mut Vec<PixelPoint>,
    transform: &CoordinateTransform,
    [ext_x, ext_y]: [AxisRange; 2],
    last: DataPoint,
    point: DataPoint,
) {
    if last.x < ext_x.low() || point.x > ext_x.high() {
        for edge in [ext_x.low(), ext_x.high()] {
            if last.x >= edge || point.x <= edge {
                continue;
            }
            if let Some(y) = interpolate(last, point, Axis::X, edge)
                && y > ext_y.low()
                && y < ext_y.high()
            {
                out.push(transform.coord_point(DataPoint::new(edge, y)));
            }
        }
    }

    let crosses_low = (last.y < ext_y.low()) != (point.y < ext_y.low());
    let crosses_high = (last.y < ext_y.high()) != (point.y < ext_y.high());
    if !crosses_low && !crosses_high {
        return;
    }
    let edges = if last.y < ext_y.low() {
        [ext_y.low(), ext_y.high()]
    } else {
        [ext_y.high(), ext_y.low()]
    };
    for edge in edges {
        if (last.y > edge) == (point.y > edge) {
            continue;
        }
        if let Some(x) = interpolate(last, point, Axis::Y, edge)
            && ext_x.contains(x)
        {
            out.push(transform.coord_point(DataPoint::new(x, edge)));
        }
    }
}

/// Coordinate on the other axis where the segment reaches `value` on `axis`.
///
/// `None` when the segment is parallel to the edge.
fn interpolate(from: DataPoint, to: DataPoint, axis: Axis, value: f64) -> Option<f64> {
    let other = axis.other();
    let delta = to.get(axis) - from.get(axis);
    if delta.abs() <= f64::EPSILON * from.get(axis).abs().max(to.get(axis).abs()).max(1.0) {
        return None;
    }
    let t = (value - from.get(axis)) / delta;
    let result = from.get(other) + t * (to.get(other) - from.get(other));
    result.is_finite().then_some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_hits_edge_linearly() {
        let from = DataPoint::new(0.0, 0.0);
        let to = DataPoint::new(2.0, 4.0);
        let y = interpolate(from, to, Axis::X, 1.0).expect("crossing");
        assert!((y - 2.0).abs() <= 1e-12);
        let x = interpolate(from, to, Axis::Y, 1.0).expect("crossing");
        assert!((x - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn interpolate_rejects_parallel_segment() {
        let from = DataPoint::new(0.0, 3.0);
        let to = DataPoint::new(5.0, 3.0);
        assert_eq!(interpolate(from, to, Axis::Y, 3.0), None);
    }
}
