use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisRange, DataPoint, PixelPoint, PlotBounds, RangeModel};

/// Region of the window relative to the two plot diagonals.
///
/// Presses in the left/right regions address the Y axis, presses in the
/// top/bottom regions address the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    Bottom,
    Left,
    Top,
    Right,
}

impl Quadrant {
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Y,
            Self::Top | Self::Bottom => Axis::X,
        }
    }

    /// `true` for the regions next to the far (right/bottom) plot edges.
    #[must_use]
    pub fn is_far_edge(self) -> bool {
        matches!(self, Self::Bottom | Self::Right)
    }
}

/// Data-to-pixel mapping for one prepare/draw pass.
///
/// `scale[axis]` is pixels per data unit; `aspect` is `scale.y / scale.x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransform {
    bounds: PlotBounds,
    range: [AxisRange; 2],
    scale: [f64; 2],
    aspect: f64,
}

impl CoordinateTransform {
    #[must_use]
    pub fn new(bounds: PlotBounds, ranges: &RangeModel) -> Self {
        let range = ranges.ranges();
        let scale = [
            bounds.x.extent / range[0].width(),
            bounds.y.extent / range[1].width(),
        ];
        Self {
            bounds,
            range,
            scale,
            aspect: scale[1] / scale[0],
        }
    }

    #[must_use]
    pub fn bounds(&self) -> PlotBounds {
        self.bounds
    }

    #[must_use]
    pub fn range(&self, axis: Axis) -> AxisRange {
        self.range[axis.index()]
    }

    #[must_use]
    pub fn scale(&self, axis: Axis) -> f64 {
        self.scale[axis.index()]
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Data value to pixel coordinate along `axis`.
    #[must_use]
    pub fn coord(&self, axis: Axis, value: f64) -> f64 {
        let low = self.range[axis.index()].low();
        match axis {
            Axis::X => self.bounds.x.low + (value - low) * self.scale[0],
            Axis::Y => self.bounds.y.high - (value - low) * self.scale[1],
        }
    }

    #[must_use]
    pub fn coord_point(&self, point: DataPoint) -> PixelPoint {
        PixelPoint::new(self.coord(Axis::X, point.x), self.coord(Axis::Y, point.y))
    }

    /// Pixel coordinate along `axis` back to a data value.
    #[must_use]
    pub fn icoord(&self, axis: Axis, pixel: f64) -> f64 {
        let low = self.range[axis.index()].low();
        match axis {
            Axis::X => (pixel - self.bounds.x.low) / self.scale[0] + low,
            Axis::Y => (self.bounds.y.high - pixel) / self.scale[1] + low,
        }
    }

    #[must_use]
    pub fn icoord_point(&self, point: PixelPoint) -> DataPoint {
        DataPoint::new(self.icoord(Axis::X, point.x), self.icoord(Axis::Y, point.y))
    }

    /// Pixel distance converted to data units along `axis`.
    #[must_use]
    pub fn pixels_to_units(&self, axis: Axis, pixels: f64) -> f64 {
        pixels / self.scale[axis.index()]
    }

    /// Classifies `point` against the two diagonals of the plot region.
    #[must_use]
    pub fn quadrant(&self, point: PixelPoint) -> Quadrant {
        quadrant_of(&self.bounds, point)
    }
}

/// Picture an X across the plot region: the two diagonals split the window
/// into four regions.
#[must_use]
pub fn quadrant_of(bounds: &PlotBounds, point: PixelPoint) -> Quadrant {
    let x_extent = bounds.x.high - bounds.x.low;
    let along = (point.x - bounds.x.low) / x_extent;
    let below_rising = point.y > bounds.y.high + along * (bounds.y.low - bounds.y.high);
    let below_falling = point.y > bounds.y.low + along * (bounds.y.high - bounds.y.low);
    match (below_rising, below_falling) {
        (true, true) => Quadrant::Bottom,
        (true, false) => Quadrant::Right,
        (false, true) => Quadrant::Left,
        (false, false) => Quadrant::Top,
    }
}
