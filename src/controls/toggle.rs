use serde::{Deserialize, Serialize};

use crate::controls::{ControlCommand, Visibility};
use crate::core::{Axis, PixelPoint, PlotBounds};
use crate::render::{CirclePrimitive, Color, DrawCommand, RenderFrame};

/// Specs with magnitude below this sit at the window edge.
const EDGE_SPEC_LIMIT: f64 = 50.0;
/// Specs near this magnitude are centered along their axis.
const CENTER_SPEC_OFFSET: f64 = 100.0;
const CONTROL_STROKE_WIDTH: f64 = 1.0;

/// Compact two-number placement of a control.
///
/// Per axis, a value with magnitude in `(0, 50)` sits in the border next to
/// a plot corner (negative picks the far edge) at `value` border units;
/// `0` or values around `±100` sit at the middle of the plot, offset by
/// `value - 100` border units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSpec {
    pub x: f64,
    pub y: f64,
}

impl ControlSpec {
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

    /// Window position for the current plot bounds.
    #[must_use]
    pub fn location(self, bounds: &PlotBounds) -> PixelPoint {
        let border = bounds.min_border();
        let anchor = bounds.corner(self.x < 0.0, self.y < 0.0);
        let mut point = PixelPoint::default();
        for axis in Axis::BOTH {
            let spec = self.get(axis);
            let magnitude = spec.abs();
            let value = if magnitude > 0.0 && magnitude < EDGE_SPEC_LIMIT {
                let shift = if spec < 0.0 { 1.0 } else { -2.0 };
                anchor.get(axis) + border * (spec + 0.5 + shift)
            } else {
                let centered = if magnitude > 0.0 {
                    spec - CENTER_SPEC_OFFSET
                } else {
                    spec
                };
                bounds.span(axis).mid() + centered * border
            };
            point.set(axis, value);
        }
        point
    }
}

/// Outcome of offering a press or release to a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlResponse {
    /// The point fell on the control; the event is consumed.
    pub hit: bool,
    /// Action to run, if the control fired.
    pub command: Option<ControlCommand>,
}

impl ControlResponse {
    pub const MISS: ControlResponse = ControlResponse {
        hit: false,
        command: None,
    };

    const fn swallowed() -> Self {
        Self {
            hit: true,
            command: None,
        }
    }
}

/// Circular on/off control.
///
/// Sticky controls keep the state a press gives them; non-sticky controls
/// are momentary buttons that flip back on release.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleControl {
    description: String,
    spec: ControlSpec,
    sticky: bool,
    toggled: bool,
    visibility: Visibility,
    on_press: Option<ControlCommand>,
    on_release: Option<ControlCommand>,
    radius_scale: f64,
    skip_release: bool,
}

impl ToggleControl {
    /// Momentary, always-visible control with no actions.
    #[must_use]
    pub fn new(description: impl Into<String>, spec: ControlSpec) -> Self {
        Self {
            description: description.into(),
            spec,
            sticky: false,
            toggled: false,
            visibility: Visibility::Always,
            on_press: None,
            on_release: None,
            radius_scale: 1.0,
            skip_release: false,
        }
    }

    #[must_use]
    pub fn sticky(mut self, initially_on: bool) -> Self {
        self.sticky = true;
        self.toggled = initially_on;
        self
    }

    #[must_use]
    pub fn visible_when(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn on_press(mut self, command: ControlCommand) -> Self {
        self.on_press = Some(command);
        self
    }

    #[must_use]
    pub fn on_release(mut self, command: ControlCommand) -> Self {
        self.on_release = Some(command);
        self
    }

    #[must_use]
    pub fn with_radius_scale(mut self, radius_scale: f64) -> Self {
        self.radius_scale = radius_scale;
        self
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn spec(&self) -> ControlSpec {
        self.spec
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.toggled
    }

    pub fn set_on(&mut self, on: bool) {
        self.toggled = on;
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn location(&self, bounds: &PlotBounds) -> PixelPoint {
        self.spec.location(bounds)
    }

    #[must_use]
    pub fn radius(&self, bounds: &PlotBounds) -> f64 {
        self.radius_scale * bounds.min_border() / 3.0
    }

    #[must_use]
    pub fn contains(&self, bounds: &PlotBounds, point: PixelPoint) -> bool {
        self.location(bounds).distance(point) < self.radius(bounds)
    }

    /// Offers a press at `point`; `visible` is the current predicate value.
    ///
    /// A press on a hidden control arms the swallow of the next release.
    pub fn press(&mut self, bounds: &PlotBounds, point: PixelPoint, visible: bool) -> ControlResponse {
        if !visible {
            self.skip_release = true;
            return if self.contains(bounds, point) {
                ControlResponse::swallowed()
            } else {
                ControlResponse::MISS
            };
        }
        if !self.contains(bounds, point) {
            return ControlResponse::MISS;
        }
        self.toggled = !self.toggled;
        ControlResponse {
            hit: true,
            command: self.on_press,
        }
    }

    /// Offers a release hit-tested at `point`.
    pub fn release(&mut self, bounds: &PlotBounds, point: PixelPoint) -> ControlResponse {
        if self.skip_release {
            self.skip_release = false;
            return if self.contains(bounds, point) {
                ControlResponse::swallowed()
            } else {
                ControlResponse::MISS
            };
        }
        if !self.contains(bounds, point) {
            return ControlResponse::MISS;
        }
        if !self.sticky {
            self.toggled = !self.toggled;
        }
        ControlResponse {
            hit: true,
            command: self.on_release,
        }
    }

    /// Emits the control: an outline ring (grey when inactive) and a center
    /// dot while on.
    pub fn draw(
        &self,
        frame: &mut RenderFrame,
        bounds: &PlotBounds,
        visible: bool,
        color: Color,
        background: Color,
    ) {
        let center = self.location(bounds);
        let radius = self.radius(bounds);
        frame.push(DrawCommand::Circle(CirclePrimitive {
            center,
            radius: radius + 1.0,
            color: background,
            filled: true,
            stroke_width: 0.0,
        }));
        frame.push(DrawCommand::Circle(CirclePrimitive {
            center,
            radius,
            color: if visible { color } else { Color::INACTIVE_GREY },
            filled: false,
            stroke_width: CONTROL_STROKE_WIDTH,
        }));
        if self.toggled {
            frame.push(DrawCommand::Circle(CirclePrimitive {
                center,
                radius: radius / 2.0,
                color,
                filled: true,
                stroke_width: 0.0,
            }));
        }
    }
}
