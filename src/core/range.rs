use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Axis, AxisSelection, DataPoint};

/// Fraction of the raw data span added on each side by `get_range`.
pub const RANGE_PADDING: f64 = 0.01;

/// Requests narrower than this fraction of the full-data width are noise.
pub const DEGENERATE_RATIO: f64 = 1e-11;

/// Bounds closer than this fraction of the full-data width are equal.
pub const ZOOM_EPSILON_RATIO: f64 = 1e-9;

/// Visible interval of one axis. `width == high - low` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    low: f64,
    high: f64,
    width: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            width: high - low,
        }
    }

    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn mid(self) -> f64 {
        0.5 * (self.low + self.high)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Widens the interval by `amount` on each side.
    #[must_use]
    pub fn expanded(self, amount: f64) -> Self {
        Self::new(self.low - amount, self.high + amount)
    }

    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.low - other.low).abs() <= epsilon && (self.high - other.high).abs() <= epsilon
    }

    /// Scans finite values and pads the result by `RANGE_PADDING` per side.
    ///
    /// Returns `None` when no finite value is present.
    #[must_use]
    pub fn padded_extent<'a>(values: impl IntoIterator<Item = &'a [f64]>) -> Option<Self> {
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for chunk in values {
            for &value in chunk {
                if !value.is_finite() {
                    continue;
                }
                low = low.min(value);
                high = high.max(value);
            }
        }
        if low > high {
            return None;
        }

        let span = high - low;
        if span > 0.0 {
            let pad = RANGE_PADDING * span;
            return Some(Self::new(low - pad, high + pad));
        }
        // A single distinct value still needs a non-zero width.
        let pad = (RANGE_PADDING * low.abs()).max(0.5);
        Some(Self::new(low - pad, high + pad))
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Per-axis current view, full-data view, and zoom flags.
///
/// Every change to the current view goes through `set_range` or
/// `range_jump`, so degenerate requests are always caught.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeModel {
    range: [AxisRange; 2],
    max_range: [AxisRange; 2],
    zoomed: [bool; 2],
}

impl Default for RangeModel {
    fn default() -> Self {
        Self {
            range: [AxisRange::default(); 2],
            max_range: [AxisRange::default(); 2],
            zoomed: [false; 2],
        }
    }
}

impl RangeModel {
    #[must_use]
    pub fn range(&self, axis: Axis) -> AxisRange {
        self.range[axis.index()]
    }

    #[must_use]
    pub fn max_range(&self, axis: Axis) -> AxisRange {
        self.max_range[axis.index()]
    }

    #[must_use]
    pub fn zoomed(&self, axis: Axis) -> bool {
        self.zoomed[axis.index()]
    }

    #[must_use]
    pub fn any_zoomed(&self) -> bool {
        self.zoomed[0] || self.zoomed[1]
    }

    #[must_use]
    pub fn ranges(&self) -> [AxisRange; 2] {
        self.range
    }

    #[must_use]
    pub fn max_ranges(&self) -> [AxisRange; 2] {
        self.max_range
    }

    #[must_use]
    pub fn zoom_flags(&self) -> [bool; 2] {
        self.zoomed
    }

    fn epsilon(&self, axis: Axis) -> f64 {
        ZOOM_EPSILON_RATIO * self.max_range[axis.index()].width.abs()
    }

    /// Installs freshly computed full-data ranges for the selected axes and
    /// resets the current view of those axes to them.
    ///
    /// Axes whose scan found nothing keep their previous bounds.
    pub fn install_max_range(&mut self, selection: AxisSelection, computed: [Option<AxisRange>; 2]) {
        for axis in selection.axes() {
            let index = axis.index();
            if let Some(extent) = computed[index] {
                self.max_range[index] = extent;
            }
            self.range[index] = self.max_range[index];
            self.zoomed[index] = false;
        }
        trace!(
            x_low = self.range[0].low,
            x_high = self.range[0].high,
            y_low = self.range[1].low,
            y_high = self.range[1].high,
            "installed max range"
        );
    }

    /// Sets the visible bounds of one axis.
    ///
    /// Requests narrower than `DEGENERATE_RATIO` of the full-data width, or
    /// with non-finite bounds, revert the axis to its full-data range.
    /// Reversed bounds are reordered.
    pub fn set_range(&mut self, axis: Axis, low: f64, high: f64) {
        let index = axis.index();
        let max = self.max_range[index];
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        if low.is_finite() && high.is_finite() && (high - low) > DEGENERATE_RATIO * max.width.abs()
        {
            self.range[index] = AxisRange::new(low, high);
        } else {
            trace!(?axis, low, high, "degenerate range request reverted");
            self.range[index] = max;
        }
        self.zoomed[index] = !self.range[index].approx_eq(max, self.epsilon(axis));
    }

    /// Translates both bounds of one axis, preserving its width.
    pub fn range_jump(&mut self, axis: Axis, distance: f64) {
        let current = self.range[axis.index()];
        self.set_range(axis, current.low + distance, current.high + distance);
    }

    /// Restores a saved full-data range and view; the view still funnels
    /// through `set_range`.
    pub fn restore(&mut self, range: [AxisRange; 2], max_range: [AxisRange; 2]) {
        self.max_range = max_range;
        for axis in Axis::BOTH {
            let saved = range[axis.index()];
            self.set_range(axis, saved.low, saved.high);
        }
    }

    /// Resets an axis view that lies entirely outside its full-data range.
    pub fn ensure_overlap(&mut self) {
        for axis in Axis::BOTH {
            let index = axis.index();
            let range = self.range[index];
            let max = self.max_range[index];
            if range.low >= max.high || range.high <= max.low {
                self.set_range(axis, max.low, max.high);
            }
        }
    }

    /// Inclusive test against the current view.
    #[must_use]
    pub fn in_range(&self, x: f64, y: f64) -> bool {
        self.range[0].contains(x) && self.range[1].contains(y)
    }

    #[must_use]
    pub fn in_range_point(&self, point: DataPoint) -> bool {
        self.in_range(point.x, point.y)
    }

    /// `true` when the views differ beyond the zoom epsilon on any axis.
    #[must_use]
    pub fn differs_from(&self, other: &RangeModel) -> bool {
        Axis::BOTH.into_iter().any(|axis| {
            !self.range[axis.index()].approx_eq(other.range[axis.index()], self.epsilon(axis))
        })
    }
}
