//! Extension points for host code that draws or reacts alongside the graph.

pub mod plugins;

pub use plugins::{GraphContext, GraphEvent, GraphPlugin, PointerInput, PointerPhase};
