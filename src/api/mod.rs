//! Public graph facade.
//!
//! `GraphViewport` is split across controller files, one per concern; each
//! adds an `impl` block over the `pub(super)` state declared in `graph.rs`.

mod control_dispatch;
mod event_controller;
mod graph;
mod graph_config;
mod label_format;
mod movie;
mod pane;
mod range_controller;
mod render_controller;
mod series_controller;
mod services;

pub use event_controller::long_status;
pub use graph::GraphViewport;
pub use graph_config::GraphConfig;
pub use label_format::{format_significant, round_to_resolution};
pub use movie::{MOVIE_STATUS, MovieStats};
pub use pane::{Pane, PaneKind, PlainPane, SelectorPane, WindowEvent};
pub use services::{
    ColorChooser, EventPoll, FixedFontMetrics, FontFit, FontMetrics, GraphServices,
    ImageExporter,
};
