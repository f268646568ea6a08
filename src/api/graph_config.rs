use serde::{Deserialize, Serialize};

use crate::core::{LineStyle, SeriesStyle, Viewport};
use crate::error::{PlotError, PlotResult};

/// Public graph bootstrap configuration.
///
/// Serializable so host applications can persist and reload graph setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub title: Option<String>,
    /// Display names; series without one are named by their 1-based index.
    #[serde(default)]
    pub series_names: Vec<String>,
    /// Backend cap on request units per draw call.
    #[serde(default = "default_max_request")]
    pub max_request: usize,
    /// Prepare workers; `None` uses the available parallelism.
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_marker_outline_width")]
    pub marker_outline_width: f64,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default = "default_movie_frames_per_second")]
    pub movie_frames_per_second: f64,
    /// Movie scroll speed in screen widths per second.
    #[serde(default = "default_movie_page_rate")]
    pub movie_page_rate: f64,
    /// Stroke width of the plot frame and selection guides.
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_export_base_name")]
    pub export_base_name: String,
}

impl GraphConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            title: None,
            series_names: Vec::new(),
            max_request: default_max_request(),
            worker_threads: None,
            marker_radius: default_marker_radius(),
            marker_outline_width: default_marker_outline_width(),
            line_width: default_line_width(),
            line_style: LineStyle::Solid,
            movie_frames_per_second: default_movie_frames_per_second(),
            movie_page_rate: default_movie_page_rate(),
            border_width: default_border_width(),
            export_base_name: default_export_base_name(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_series_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_max_request(mut self, max_request: usize) -> Self {
        self.max_request = max_request;
        self
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, style: SeriesStyle) -> Self {
        self.marker_radius = style.marker_radius;
        self.marker_outline_width = style.marker_outline_width;
        self.line_width = style.line_width;
        self.line_style = style.line_style;
        self
    }

    #[must_use]
    pub fn with_movie(mut self, frames_per_second: f64, page_rate: f64) -> Self {
        self.movie_frames_per_second = frames_per_second;
        self.movie_page_rate = page_rate;
        self
    }

    #[must_use]
    pub fn with_export_base_name(mut self, name: impl Into<String>) -> Self {
        self.export_base_name = name.into();
        self
    }

    /// Marker and line parameters this config starts with.
    #[must_use]
    pub fn series_style(&self) -> SeriesStyle {
        SeriesStyle {
            marker_radius: self.marker_radius,
            marker_outline_width: self.marker_outline_width,
            line_width: self.line_width,
            line_style: self.line_style,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.max_request < 2 {
            return Err(PlotError::Config(
                "max_request must allow at least two primitives".to_owned(),
            ));
        }
        if self.worker_threads == Some(0) {
            return Err(PlotError::Config("worker_threads must be > 0".to_owned()));
        }
        for (name, value) in [
            ("marker_radius", self.marker_radius),
            ("marker_outline_width", self.marker_outline_width),
            ("line_width", self.line_width),
            ("border_width", self.border_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::Config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("movie_frames_per_second", self.movie_frames_per_second),
            ("movie_page_rate", self.movie_page_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::Config(format!("{name} must be finite and > 0")));
            }
        }
        if self.export_base_name.trim().is_empty() {
            return Err(PlotError::Config(
                "export_base_name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::Config(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::Config(format!("failed to parse config: {e}")))
    }
}

fn default_max_request() -> usize {
    65_535
}

fn default_marker_radius() -> f64 {
    SeriesStyle::DEFAULT_MARKER_RADIUS
}

fn default_marker_outline_width() -> f64 {
    SeriesStyle::DEFAULT_MARKER_OUTLINE_WIDTH
}

fn default_line_width() -> f64 {
    SeriesStyle::DEFAULT_LINE_WIDTH
}

fn default_movie_frames_per_second() -> f64 {
    15.0
}

fn default_movie_page_rate() -> f64 {
    0.35
}

fn default_border_width() -> f64 {
    3.0
}

fn default_export_base_name() -> String {
    "ggraph".to_owned()
}
