use serde::{Deserialize, Serialize};

/// Dash pattern used for series polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    OnOffDash,
    DoubleDash,
}

/// Marker and line parameters shared by every series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub marker_radius: f64,
    pub marker_outline_width: f64,
    pub line_width: f64,
    pub line_style: LineStyle,
}

impl SeriesStyle {
    pub const DEFAULT_MARKER_RADIUS: f64 = 4.0;
    pub const DEFAULT_MARKER_OUTLINE_WIDTH: f64 = 2.0;
    pub const DEFAULT_LINE_WIDTH: f64 = 4.0;
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            marker_radius: Self::DEFAULT_MARKER_RADIUS,
            marker_outline_width: Self::DEFAULT_MARKER_OUTLINE_WIDTH,
            line_width: Self::DEFAULT_LINE_WIDTH,
            line_style: LineStyle::Solid,
        }
    }
}
