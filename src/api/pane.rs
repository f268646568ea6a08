use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{PixelPoint, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{KeyEvent, Modifiers, PointerEvent};
use crate::render::{Color, Renderer};

use super::GraphViewport;

/// Capability tag of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaneKind {
    Plain,
    Graph,
    Selector,
}

/// Window event routed to one pane by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindowEvent {
    Press(PointerEvent),
    Release(PointerEvent),
    Motion {
        position: PixelPoint,
        modifiers: Modifiers,
    },
    Key(KeyEvent),
    Enter,
    Leave,
    Resize(Viewport),
    Expose,
}

/// Tabular cell selector living in its own pane.
pub trait SelectorPane {
    fn title(&self) -> &str;

    /// Handles one event; returns whether the selection changed.
    fn handle(&mut self, event: &WindowEvent) -> PlotResult<bool>;
}

/// Pane that only tracks its size and paints a flat background.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainPane {
    viewport: Viewport,
    background: Color,
    exposures: usize,
}

impl PlainPane {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            exposures: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn exposures(&self) -> usize {
        self.exposures
    }

    fn handle(&mut self, event: &WindowEvent) -> PlotResult<()> {
        match *event {
            WindowEvent::Resize(viewport) => {
                if !viewport.is_valid() {
                    return Err(PlotError::InvalidViewport {
                        width: viewport.width,
                        height: viewport.height,
                    });
                }
                self.viewport = viewport;
            }
            WindowEvent::Expose => self.exposures += 1,
            _ => {}
        }
        Ok(())
    }
}

/// One window's content, dispatched by capability instead of by type
/// hierarchy.
pub enum Pane<R: Renderer> {
    Plain(PlainPane),
    Graph(Box<GraphViewport<R>>),
    Selector(Box<dyn SelectorPane>),
}

impl<R: Renderer> Pane<R> {
    #[must_use]
    pub fn kind(&self) -> PaneKind {
        match self {
            Self::Plain(_) => PaneKind::Plain,
            Self::Graph(_) => PaneKind::Graph,
            Self::Selector(_) => PaneKind::Selector,
        }
    }

    #[must_use]
    pub fn as_graph(&self) -> Option<&GraphViewport<R>> {
        match self {
            Self::Graph(graph) => Some(&**graph),
            _ => None,
        }
    }

    pub fn as_graph_mut(&mut self) -> Option<&mut GraphViewport<R>> {
        match self {
            Self::Graph(graph) => Some(&mut **graph),
            _ => None,
        }
    }

    /// Routes `event` to the pane's handler.
    pub fn dispatch(&mut self, event: WindowEvent) -> PlotResult<()> {
        trace!(kind = ?self.kind(), ?event, "window event");
        match self {
            Self::Plain(pane) => pane.handle(&event),
            Self::Graph(graph) => graph.handle_event(event),
            Self::Selector(selector) => selector.handle(&event).map(|_| ()),
        }
    }
}

impl<R: Renderer> GraphViewport<R> {
    /// Entry point for host event loops.
    pub fn handle_event(&mut self, event: WindowEvent) -> PlotResult<()> {
        match event {
            WindowEvent::Press(pointer) => self.pointer_press(pointer),
            WindowEvent::Release(pointer) => self.pointer_release(pointer),
            WindowEvent::Motion {
                position,
                modifiers,
            } => self.pointer_motion(position, modifiers),
            WindowEvent::Key(key) => self.key_press(key),
            WindowEvent::Enter => self.pointer_enter(),
            WindowEvent::Leave => self.pointer_leave(),
            WindowEvent::Resize(viewport) => self.resize(viewport),
            WindowEvent::Expose => self.expose(),
        }
    }
}
