use std::fmt::Write as _;

use tracing::debug;

use crate::controls::ControlId;
use crate::core::{Axis, AxisRange, AxisSelection, DataPoint};
use crate::render::Renderer;

use super::GraphViewport;

impl<R: Renderer> GraphViewport<R> {
    /// Recomputes the full-data range of the selected axes from the visible
    /// series and resets the view of those axes to it.
    pub fn get_range(&mut self, selection: AxisSelection) {
        let mut computed: [Option<AxisRange>; 2] = [None, None];
        for axis in selection.axes() {
            let visible = (0..self.series.len())
                .filter(|&index| self.controls.is_on(ControlId::Series(index)));
            let views: Vec<&[f64]> = visible
                .map(|index| self.series.view(index, self.log_axes).values(axis))
                .collect();
            computed[axis.index()] = AxisRange::padded_extent(views);
        }
        self.ranges.install_max_range(selection, computed);
        debug!(?selection, "range recomputed from visible series");
    }

    /// Sets the visible bounds of one axis; degenerate requests revert the
    /// axis to its full-data range. Does not redraw.
    pub fn set_range(&mut self, axis: Axis, low: f64, high: f64) {
        self.ranges.set_range(axis, low, high);
    }

    /// Pans one axis by `distance` data units. Does not redraw.
    pub fn range_jump(&mut self, axis: Axis, distance: f64) {
        self.ranges.range_jump(axis, distance);
    }

    #[must_use]
    pub fn in_range(&self, x: f64, y: f64) -> bool {
        self.ranges.in_range(x, y)
    }

    #[must_use]
    pub fn in_range_point(&self, point: DataPoint) -> bool {
        self.ranges.in_range_point(point)
    }

    /// One-line dump of range, bounds and scale, also logged at debug level.
    #[must_use]
    pub fn describe_range(&self, prefix: &str) -> String {
        let mut out = format!("{prefix} range");
        for axis in Axis::BOTH {
            let range = self.ranges.range(axis);
            let _ = write!(out, " {} {} {}", range.low(), range.high(), range.width());
        }
        out.push_str(" bounds");
        for axis in Axis::BOTH {
            let span = self.bounds.span(axis);
            let _ = write!(out, " {} {} {}", span.low, span.high, span.extent);
        }
        let _ = write!(
            out,
            " scale {} {} {}",
            self.transform.scale(Axis::X),
            self.transform.scale(Axis::Y),
            self.transform.aspect()
        );
        debug!(description = %out, "range described");
        out
    }
}
