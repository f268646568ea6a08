use serde::{Deserialize, Serialize};

use crate::core::{ClipRect, PixelPoint};

/// Pointer button, numbered like a three-button mouse with a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    /// Button 1.
    Primary,
    /// Button 2 (middle).
    Secondary,
    /// Button 3.
    Tertiary,
    WheelUp,
    WheelDown,
    Other(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
    };
    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
    };
}

/// Button press or release at a window position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: PixelPoint,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub fn new(position: PixelPoint, button: PointerButton, modifiers: Modifiers) -> Self {
        Self {
            position,
            button,
            modifiers,
        }
    }

    #[must_use]
    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(PixelPoint::new(x, y), PointerButton::Primary, Modifiers::NONE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Char(char),
}

/// Key press; `position` is the pointer location when the key went down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub position: PixelPoint,
}

/// Meaning of a press, fixed for the whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureClass {
    /// Click re-centers, drag selects a new view.
    Center,
    /// Drag pans.
    Scroll,
    /// Click zooms out (or in, for the wheel), drag rubber-zooms.
    Zoom,
}

impl GestureClass {
    /// Button 2 or Shift scrolls, button 3 or Control zooms, button 1
    /// centers. The wheel zooms.
    #[must_use]
    pub fn classify(button: PointerButton, modifiers: Modifiers) -> Option<Self> {
        if button == PointerButton::Secondary || modifiers.shift {
            return Some(Self::Scroll);
        }
        if button == PointerButton::Tertiary || modifiers.control {
            return Some(Self::Zoom);
        }
        match button {
            PointerButton::Primary => Some(Self::Center),
            PointerButton::WheelUp | PointerButton::WheelDown => Some(Self::Zoom),
            _ => None,
        }
    }
}

/// Press that opened the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Click {
    pub position: PixelPoint,
    pub button: PointerButton,
    pub class: GestureClass,
}

impl Click {
    /// Width multiplier of a click without drag.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        match (self.class, self.button) {
            (GestureClass::Zoom, PointerButton::WheelUp) => 0.1,
            (GestureClass::Zoom, _) => 10.0,
            _ => 1.0,
        }
    }
}

/// Transient feedback drawn over the graph during a select drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionOverlay {
    RubberBand(ClipRect),
    GuideLine { from: PixelPoint, to: PixelPoint },
}

/// Per-viewport gesture state: idle while `click` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    click: Option<Click>,
    last_motion: PixelPoint,
    moved: bool,
    small_move: bool,
    pointer: Option<PixelPoint>,
    inside: bool,
    overlay: Option<SelectionOverlay>,
}

impl InteractionState {
    #[must_use]
    pub fn click(&self) -> Option<Click> {
        self.click
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.click.is_none()
    }

    #[must_use]
    pub fn last_motion(&self) -> PixelPoint {
        self.last_motion
    }

    #[must_use]
    pub fn moved(&self) -> bool {
        self.moved
    }

    #[must_use]
    pub fn small_move(&self) -> bool {
        self.small_move
    }

    /// Last known pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<PixelPoint> {
        self.pointer
    }

    #[must_use]
    pub fn pointer_inside(&self) -> bool {
        self.inside
    }

    #[must_use]
    pub fn overlay(&self) -> Option<SelectionOverlay> {
        self.overlay
    }

    /// Opens a gesture; returns its classification.
    pub fn on_press(&mut self, event: PointerEvent) -> Option<GestureClass> {
        let class = GestureClass::classify(event.button, event.modifiers)?;
        self.click = Some(Click {
            position: event.position,
            button: event.button,
            class,
        });
        self.last_motion = event.position;
        self.moved = false;
        self.small_move = false;
        self.overlay = None;
        Some(class)
    }

    pub fn on_pointer_move(&mut self, position: PixelPoint) {
        self.pointer = Some(position);
        self.inside = true;
    }

    pub fn on_pointer_enter(&mut self) {
        self.inside = true;
    }

    /// Marks the active gesture as a drag.
    pub fn mark_moved(&mut self) {
        self.moved = true;
    }

    pub fn set_last_motion(&mut self, position: PixelPoint) {
        self.last_motion = position;
    }

    pub fn set_small_move(&mut self, small: bool) {
        self.small_move = small;
    }

    pub fn set_overlay(&mut self, overlay: Option<SelectionOverlay>) {
        self.overlay = overlay;
    }

    /// Closes the gesture and returns the press that opened it.
    pub fn finish(&mut self) -> Option<Click> {
        self.moved = false;
        self.overlay = None;
        self.click.take()
    }

    pub fn on_pointer_leave(&mut self) {
        self.inside = false;
    }

    /// Forces the inside flag, used while capturing an image.
    pub fn set_inside(&mut self, inside: bool) {
        self.inside = inside;
    }
}
