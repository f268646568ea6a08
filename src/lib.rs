//! ggraph: interactive 2-D scatter/line graph viewport engine.
//!
//! The engine owns the range/zoom model, the toggle controls, the parallel
//! render-preparation pass and the pointer interaction state machine. Window
//! systems, fonts, color choosers and image export plug in through narrow
//! traits so the whole engine runs headless.

pub mod api;
pub mod controls;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GraphConfig, GraphServices, GraphViewport, Pane, WindowEvent};
pub use error::{PlotError, PlotResult};
