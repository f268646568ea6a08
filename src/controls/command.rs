use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisSelection};

/// Stable handle of one control inside a graph viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    Help,
    Coordinates,
    Markers,
    Outlines,
    Lines,
    TickLabels(Axis),
    LogScale(Axis),
    MajorGrid(Axis),
    MinorGrid(Axis),
    Movie { forward: bool },
    PreviousView,
    SaveImage,
    ZoomOut(AxisSelection),
    /// Pans by `half_screens / 2` of the current width.
    Jump { axis: Axis, half_screens: i8 },
    MarkersBigger,
    MarkersSmaller,
    OutlinesThicker,
    OutlinesThinner,
    LinesThicker,
    LinesThinner,
    Defaults,
    Series(usize),
    Plugin(usize),
}

/// Action a control asks its viewport to run on press or release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlCommand {
    /// Nothing beyond redrawing the controls.
    Refresh,
    /// Help text was toggled; coordinates display turns off.
    ShowHelp,
    /// Coordinates display was toggled; help text turns off.
    ShowCoordinates,
    /// Redraw the series layer without recomputing geometry.
    Redraw,
    /// Recompute geometry, then redraw.
    Reprepare,
    /// Recompute geometry when the control turned on, otherwise redraw.
    ReprepareIfOn,
    ToggleLog(Axis),
    MajorGrid(Axis),
    MinorGrid(Axis),
    PlayMovie { forward: bool },
    PreviousView,
    SaveImage,
    ZoomOut(AxisSelection),
    /// Pans `axis` by `screens` times the current width.
    Jump { axis: Axis, screens: f64 },
    MarkerRadius(f64),
    OutlineWidth(f64),
    LineWidth(f64),
    RestoreDefaults,
}

/// Predicate deciding whether a control is active.
///
/// Hidden controls still draw (greyed out) and still swallow clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Always,
    PointerInside,
    CanDoMarkers,
    DoMarkers,
    CanDoLines,
    DoLines,
    /// `Both` means either axis is zoomed.
    Zoomed(AxisSelection),
    HistoryAvailable,
    MarkersShrinkable,
    OutlinesOn,
    OutlinesThinnable,
    LinesThinnable,
    DefaultsDiffer,
}
