use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, LogAxes, PixelPoint, PlotBounds};
use crate::interaction::{Modifiers, PointerButton};
use crate::render::RenderFrame;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphContext {
    pub bounds: PlotBounds,
    pub range: [AxisRange; 2],
    pub max_range: [AxisRange; 2],
    pub zoomed: [bool; 2],
    pub log_axes: LogAxes,
    pub series_count: usize,
    pub pointer_inside: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Press,
    Motion,
    Release,
}

/// Pointer input offered to plugins after the controls declined it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub phase: PointerPhase,
    pub position: PixelPoint,
    /// `None` for motion.
    pub button: Option<PointerButton>,
    pub modifiers: Modifiers,
}

/// Hook points of one prepare/draw cycle.
#[derive(Debug)]
pub enum GraphEvent<'a> {
    /// Geometry was recomputed.
    Prepare,
    /// Before the series are drawn; primitives land under the series.
    PreDraw(&'a mut RenderFrame),
    /// After the series are drawn; primitives land on top.
    Draw(&'a mut RenderFrame),
    Pointer(PointerInput),
}

/// User call-back attached to a graph with its own enable control.
///
/// Disabled plugins receive no events. Returning `true` from a pointer
/// event consumes it before any viewport gesture runs.
pub trait GraphPlugin {
    fn id(&self) -> &str;

    /// Help text shown for the plugin's control.
    fn description(&self) -> &str;

    fn initially_enabled(&self) -> bool {
        true
    }

    fn on_event(&mut self, event: GraphEvent<'_>, context: &GraphContext) -> bool;
}
