//! Built-in control layout of a graph viewport.

use crate::controls::{
    ControlCommand, ControlId, ControlSet, ControlSpec, ToggleControl, Visibility,
};
use crate::core::{Axis, AxisSelection};

fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "X",
        Axis::Y => "Y",
    }
}

/// Spec on the X-axis edge (`x`, `-1`) or Y-axis edge (`1`, `-y`).
fn axis_edge_spec(axis: Axis, offset: f64) -> ControlSpec {
    match axis {
        Axis::X => ControlSpec::new(offset, -1.0),
        Axis::Y => ControlSpec::new(1.0, -offset),
    }
}

/// Every control except the plugin ones, in dispatch priority order:
/// fixed built-ins, per-series controls, then the momentary actions.
#[must_use]
pub fn builtin_controls(series_names: &[String]) -> ControlSet {
    let mut set = ControlSet::new();

    set.insert(
        ControlId::Help,
        ToggleControl::new("Toggle showing help text for controls", ControlSpec::new(1.0, 2.0))
            .sticky(true)
            .on_press(ControlCommand::ShowHelp),
    );
    set.insert(
        ControlId::Coordinates,
        ToggleControl::new("Toggle showing coordinates of cursor", ControlSpec::new(1.0, 3.0))
            .sticky(false)
            .on_press(ControlCommand::ShowCoordinates),
    );
    set.insert(
        ControlId::Markers,
        ToggleControl::new("Draw a marker at each graph point", ControlSpec::new(-1.0, -2.0))
            .sticky(true)
            .visible_when(Visibility::CanDoMarkers)
            .on_press(ControlCommand::ReprepareIfOn),
    );
    set.insert(
        ControlId::Outlines,
        ToggleControl::new(
            "Toggle between solid and outlined markers",
            ControlSpec::new(-1.0, -5.5),
        )
        .sticky(false)
        .visible_when(Visibility::DoMarkers)
        .on_press(ControlCommand::Redraw),
    );
    set.insert(
        ControlId::Lines,
        ToggleControl::new("Connect graph points by lines", ControlSpec::new(-2.0, -1.0))
            .sticky(false)
            .visible_when(Visibility::CanDoLines)
            .on_press(ControlCommand::ReprepareIfOn),
    );
    for axis in Axis::BOTH {
        set.insert(
            ControlId::TickLabels(axis),
            ToggleControl::new(
                format!(
                    "Toggle axis labels on {} axis (shown when cursor leaves window)",
                    axis_label(axis)
                ),
                axis_edge_spec(axis, 5.5),
            )
            .sticky(false)
            .on_press(ControlCommand::Refresh),
        );
    }
    for axis in Axis::BOTH {
        set.insert(
            ControlId::LogScale(axis),
            ToggleControl::new(
                format!("Toggle logarithmic scale on {} axis", axis_label(axis)),
                axis_edge_spec(axis, 6.5),
            )
            .sticky(false)
            .on_press(ControlCommand::ToggleLog(axis)),
        );
    }
    for axis in Axis::BOTH {
        set.insert(
            ControlId::MajorGrid(axis),
            ToggleControl::new(
                format!("Toggle major grid lines on {} axis", axis_label(axis)),
                axis_edge_spec(axis, 4.25),
            )
            .sticky(true)
            .on_press(ControlCommand::MajorGrid(axis)),
        );
    }
    for axis in Axis::BOTH {
        set.insert(
            ControlId::MinorGrid(axis),
            ToggleControl::new(
                format!("Toggle minor grid lines on {} axis", axis_label(axis)),
                axis_edge_spec(axis, 3.25),
            )
            .sticky(true)
            .on_press(ControlCommand::MinorGrid(axis)),
        );
    }
    for (forward, offset, direction) in [(false, 97.5, "left"), (true, 102.5, "right")] {
        set.insert(
            ControlId::Movie { forward },
            ToggleControl::new(
                format!("Play a movie traveling {direction}"),
                ControlSpec::new(offset, -1.0),
            )
            .sticky(false)
            .visible_when(Visibility::Zoomed(AxisSelection::X))
            .on_press(ControlCommand::PlayMovie { forward }),
        );
    }
    set.insert(
        ControlId::PreviousView,
        ToggleControl::new("Show previous view", ControlSpec::new(-1.0, 1.0))
            .visible_when(Visibility::HistoryAvailable)
            .on_release(ControlCommand::PreviousView),
    );

    let series_count = series_names.len();
    for (index, name) in series_names.iter().enumerate() {
        set.insert(
            ControlId::Series(index),
            ToggleControl::new(
                format!(
                    "Pointer clicks toggle display or change colors (buttons 2,3) for series {name}"
                ),
                ControlSpec::new(-1.0, series_count as f64 + 1.0 - index as f64),
            )
            .sticky(true)
            .visible_when(Visibility::PointerInside)
            .on_press(ControlCommand::Reprepare),
        );
    }

    insert_actions(&mut set);
    set
}

fn insert_actions(set: &mut ControlSet) {
    let action = |description: &str, x: f64, y: f64, visibility, command| {
        ToggleControl::new(description, ControlSpec::new(x, y))
            .visible_when(visibility)
            .on_press(command)
    };

    set.insert(
        ControlId::SaveImage,
        action(
            "Save an image of graph",
            1.0,
            1.0,
            Visibility::Always,
            ControlCommand::SaveImage,
        ),
    );
    for (selection, description, x, y) in [
        (AxisSelection::Both, "Zoom out both axes", 1.0, -1.0),
        (AxisSelection::X, "Zoom out X axis", 2.0, -1.0),
        (AxisSelection::Y, "Zoom out Y axis", 1.0, -2.0),
    ] {
        set.insert(
            ControlId::ZoomOut(selection),
            action(
                description,
                x,
                y,
                Visibility::Zoomed(selection),
                ControlCommand::ZoomOut(selection),
            ),
        );
    }
    for (half_screens, description, offset) in [
        (-2, "Jump left X axis by one screen", 98.5),
        (-1, "Jump left X axis by half a screen", 99.5),
        (1, "Jump right X axis by half a screen", 100.5),
        (2, "Jump right X axis by one screen", 101.5),
    ] {
        set.insert(
            ControlId::Jump {
                axis: Axis::X,
                half_screens,
            },
            action(
                description,
                offset,
                -1.0,
                Visibility::Zoomed(AxisSelection::X),
                ControlCommand::Jump {
                    axis: Axis::X,
                    screens: f64::from(half_screens) / 2.0,
                },
            ),
        );
    }
    for (half_screens, description, offset) in [
        (2, "Jump up Y axis by one screen", 98.5),
        (1, "Jump up Y axis by half a screen", 99.5),
        (-1, "Jump down Y axis by half a screen", 100.5),
        (-2, "Jump down Y axis by one screen", 101.5),
    ] {
        set.insert(
            ControlId::Jump {
                axis: Axis::Y,
                half_screens,
            },
            action(
                description,
                1.0,
                offset,
                Visibility::Zoomed(AxisSelection::Y),
                ControlCommand::Jump {
                    axis: Axis::Y,
                    screens: f64::from(half_screens) / 2.0,
                },
            ),
        );
    }
    let sizing = [
        (
            ControlId::MarkersBigger,
            "Make markers bigger",
            (-1.0, -4.25),
            Visibility::DoMarkers,
            ControlCommand::MarkerRadius(1.0),
        ),
        (
            ControlId::MarkersSmaller,
            "Make markers smaller",
            (-1.0, -3.25),
            Visibility::MarkersShrinkable,
            ControlCommand::MarkerRadius(-1.0),
        ),
        (
            ControlId::OutlinesThicker,
            "Make marker outlines thicker",
            (-1.0, -7.75),
            Visibility::OutlinesOn,
            ControlCommand::OutlineWidth(1.0),
        ),
        (
            ControlId::OutlinesThinner,
            "Make marker outlines thinner",
            (-1.0, -6.75),
            Visibility::OutlinesThinnable,
            ControlCommand::OutlineWidth(-1.0),
        ),
        (
            ControlId::LinesThicker,
            "Make series lines thicker",
            (-3.25, -1.0),
            Visibility::DoLines,
            ControlCommand::LineWidth(1.0),
        ),
        (
            ControlId::LinesThinner,
            "Make series lines thinner",
            (-4.25, -1.0),
            Visibility::LinesThinnable,
            ControlCommand::LineWidth(-1.0),
        ),
        (
            ControlId::Defaults,
            "Set default values for color, line and marker properties",
            (-1.0, -1.0),
            Visibility::DefaultsDiffer,
            ControlCommand::RestoreDefaults,
        ),
    ];
    for (id, description, (x, y), visibility, command) in sizing {
        set.insert(id, action(description, x, y, visibility, command));
    }
}

/// Enable control of plugin `index`, stacked below the coordinates control.
#[must_use]
pub fn plugin_control(index: usize, description: &str, initially_on: bool) -> ToggleControl {
    ToggleControl::new(description, ControlSpec::new(1.0, index as f64 + 4.0))
        .sticky(initially_on)
        .on_press(ControlCommand::Redraw)
}

/// Controls whose states are part of each saved view, in snapshot order.
#[must_use]
pub fn tracked_controls(series_count: usize) -> Vec<ControlId> {
    [ControlId::Markers, ControlId::Outlines, ControlId::Lines]
        .into_iter()
        .chain((0..series_count).map(ControlId::Series))
        .collect()
}
