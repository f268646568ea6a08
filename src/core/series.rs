use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::core::Axis;
use crate::error::{PlotError, PlotResult};

/// Upper bound on the number of series a single graph displays.
pub const MAX_SERIES: usize = 512;

/// One labeled `(x, y)` data series.
///
/// Values are shared, never mutated by the graph. Line clipping expects
/// `x` to be non-decreasing; unsorted input draws truncated polylines.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    x: Arc<[f64]>,
    y: Arc<[f64]>,
}

impl Series {
    pub fn new(
        name: impl Into<String>,
        x: impl Into<Arc<[f64]>>,
        y: impl Into<Arc<[f64]>>,
    ) -> PlotResult<Self> {
        let name = name.into();
        let x = x.into();
        let y = y.into();
        if x.len() != y.len() {
            return Err(PlotError::InvalidData(format!(
                "series `{name}` has {} x values but {} y values",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { name, x, y })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn values(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Which axes currently display log10-transformed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogAxes {
    pub x: bool,
    pub y: bool,
}

impl LogAxes {
    #[must_use]
    pub fn get(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, on: bool) {
        match axis {
            Axis::X => self.x = on,
            Axis::Y => self.y = on,
        }
    }
}

/// Borrowed view of one series in the active (linear or log) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
}

impl<'a> SeriesView<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn values(&self, axis: Axis) -> &'a [f64] {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

#[derive(Debug, Default)]
struct LogCache {
    x: OnceLock<Box<[f64]>>,
    y: OnceLock<Box<[f64]>>,
}

impl LogCache {
    fn get(&self, axis: Axis, raw: &[f64]) -> &[f64] {
        let slot = match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        };
        slot.get_or_init(|| raw.iter().map(|value| value.log10()).collect())
    }
}

/// The full set of series shown by one graph, plus lazily built log copies.
#[derive(Debug)]
pub struct SeriesSet {
    series: Vec<Series>,
    logs: Vec<LogCache>,
}

impl SeriesSet {
    pub fn new(series: Vec<Series>) -> PlotResult<Self> {
        if series.is_empty() {
            return Err(PlotError::EmptyInput("at least one series is required"));
        }
        if series.len() > MAX_SERIES {
            return Err(PlotError::TooManySeries {
                count: series.len(),
                max: MAX_SERIES,
            });
        }
        let logs = series.iter().map(|_| LogCache::default()).collect();
        Ok(Self { series, logs })
    }

    /// Builds unnamed series from `(x, y)` pairs; names are `1`, `2`, ...
    pub fn from_pairs<I, X, Y>(pairs: I) -> PlotResult<Self>
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<Arc<[f64]>>,
        Y: Into<Arc<[f64]>>,
    {
        let series = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (x, y))| Series::new((index + 1).to_string(), x, y))
            .collect::<PlotResult<Vec<_>>>()?;
        Self::new(series)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Returns series `index` in the coordinates selected by `log_axes`.
    ///
    /// Log copies are computed on first request and cached for the lifetime
    /// of the set. Non-positive values become non-finite and are skipped by
    /// every consumer.
    #[must_use]
    pub fn view(&self, index: usize, log_axes: LogAxes) -> SeriesView<'_> {
        let series = &self.series[index];
        let cache = &self.logs[index];
        let x = if log_axes.x {
            cache.get(Axis::X, &series.x)
        } else {
            &series.x
        };
        let y = if log_axes.y {
            cache.get(Axis::Y, &series.y)
        } else {
            &series.y
        };
        SeriesView { x, y }
    }

    /// Warms the log caches so a later parallel pass only reads.
    pub fn prepare_log(&self, log_axes: LogAxes) {
        for index in 0..self.series.len() {
            let _ = self.view(index, log_axes);
        }
    }
}
