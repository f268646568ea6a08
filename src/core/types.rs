use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the two graph axes. Used as an index into per-axis state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Axis target of a range operation or gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSelection {
    X,
    Y,
    Both,
}

impl AxisSelection {
    #[must_use]
    pub fn axes(self) -> SmallVec<[Axis; 2]> {
        match self {
            Self::X => SmallVec::from_slice(&[Axis::X]),
            Self::Y => SmallVec::from_slice(&[Axis::Y]),
            Self::Both => SmallVec::from_slice(&Axis::BOTH),
        }
    }

    #[must_use]
    pub fn contains(self, axis: Axis) -> bool {
        match self {
            Self::Both => true,
            Self::X => axis == Axis::X,
            Self::Y => axis == Axis::Y,
        }
    }
}

impl From<Axis> for AxisSelection {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
        }
    }
}

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => f64::from(self.width),
            Axis::Y => f64::from(self.height),
        }
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < f64::from(self.width)
            && point.y < f64::from(self.height)
    }
}

/// Point in window pixel space; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    #[must_use]
    pub fn distance(self, other: PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel extent of the drawing region along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSpan {
    pub low: f64,
    pub high: f64,
    pub extent: f64,
}

impl PixelSpan {
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            extent: high - low,
        }
    }

    #[must_use]
    pub fn mid(self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Plot region inside the window, surrounded by a border on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub viewport: Viewport,
    pub x: PixelSpan,
    pub y: PixelSpan,
}

impl PlotBounds {
    /// Fraction of the smaller window dimension reserved as border.
    pub const BORDER_RATIO: f64 = 0.05;

    /// Derives the plot region from the window size.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let border = Self::border_for(viewport);
        Self {
            viewport,
            x: PixelSpan::new(border, f64::from(viewport.width) - border),
            y: PixelSpan::new(border, f64::from(viewport.height) - border),
        }
    }

    #[must_use]
    pub fn border_for(viewport: Viewport) -> f64 {
        (Self::BORDER_RATIO * f64::from(viewport.width.min(viewport.height))).floor()
    }

    #[must_use]
    pub fn span(&self, axis: Axis) -> PixelSpan {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Smallest distance between the plot region and the window edge.
    #[must_use]
    pub fn min_border(&self) -> f64 {
        let right = f64::from(self.viewport.width) - self.x.high;
        let bottom = f64::from(self.viewport.height) - self.y.high;
        self.x.low.min(self.y.low).min(right).min(bottom)
    }

    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.x.low
            && point.x <= self.x.high
            && point.y >= self.y.low
            && point.y <= self.y.high
    }

    #[must_use]
    pub fn clip_rect(&self) -> ClipRect {
        ClipRect {
            x: self.x.low,
            y: self.y.low,
            width: self.x.extent,
            height: self.y.extent,
        }
    }

    /// Corner of the plot region; `high_x`/`high_y` select the far edges.
    #[must_use]
    pub fn corner(&self, high_x: bool, high_y: bool) -> PixelPoint {
        PixelPoint::new(
            if high_x { self.x.high } else { self.x.low },
            if high_y { self.y.high } else { self.y.low },
        )
    }
}

/// Axis-aligned pixel rectangle used for clipping, fills and export regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClipRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn whole(viewport: Viewport) -> Self {
        Self::new(0.0, 0.0, f64::from(viewport.width), f64::from(viewport.height))
    }
}
