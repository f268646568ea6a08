pub mod history;
pub mod range;
pub mod scale;
pub mod series;
pub mod style;
pub mod ticks;
pub mod types;

pub use history::{SavedConfig, ViewHistory};
pub use range::{AxisRange, RangeModel};
pub use scale::{CoordinateTransform, Quadrant, quadrant_of};
pub use series::{LogAxes, MAX_SERIES, Series, SeriesSet, SeriesView};
pub use style::{LineStyle, SeriesStyle};
pub use ticks::{Tick, TickAxis, TickIter};
pub use types::{
    Axis, AxisSelection, ClipRect, DataPoint, PixelPoint, PixelSpan, PlotBounds, Viewport,
};
