use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and windowless usage.
///
/// It validates every frame and keeps the last one so callers can inspect
/// exactly what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_command_count(&self) -> usize {
        self.last_frame
            .as_ref()
            .map_or(0, |frame| frame.commands.len())
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
