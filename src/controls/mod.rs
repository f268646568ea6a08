//! Toggle controls: the on/off widgets that drive every graph feature.
//!
//! Controls hold no references to their viewport. Each one carries a
//! `Visibility` tag the viewport evaluates and `ControlCommand`s the
//! viewport executes when the control fires.

mod catalog;
mod command;
mod set;
mod toggle;

pub use catalog::{builtin_controls, plugin_control, tracked_controls};
pub use command::{ControlCommand, ControlId, Visibility};
pub use set::ControlSet;
pub use toggle::{ControlResponse, ControlSpec, ToggleControl};
