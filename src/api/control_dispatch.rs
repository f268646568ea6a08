use tracing::{debug, warn};

use crate::controls::{ControlCommand, ControlId};
use crate::core::{AxisSelection, ClipRect};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::GraphViewport;
use super::render_controller::Repaint;

/// Smallest marker radius and stroke width the sizing controls go down to.
const MIN_SIZE: f64 = 1.0;

impl<R: Renderer> GraphViewport<R> {
    /// Runs the action of control `id`, whose toggle state already reflects
    /// the press or release that fired it.
    pub(super) fn execute_command(
        &mut self,
        id: ControlId,
        command: ControlCommand,
    ) -> PlotResult<Repaint> {
        let on = self.controls.is_on(id);
        debug!(?id, ?command, on, "control command");
        let level = match command {
            ControlCommand::Refresh => Repaint::Refresh,
            ControlCommand::ShowHelp => {
                if on {
                    self.controls.set(ControlId::Coordinates, false);
                }
                self.status_forced = false;
                if let Some(pointer) = self.interaction.pointer() {
                    self.update_status(pointer);
                }
                Repaint::Refresh
            }
            ControlCommand::ShowCoordinates => {
                if on {
                    self.controls.set(ControlId::Help, false);
                }
                self.status.clear();
                self.status_forced = false;
                Repaint::Refresh
            }
            ControlCommand::Redraw => Repaint::Draw,
            ControlCommand::Reprepare => Repaint::PrepareDraw,
            ControlCommand::ReprepareIfOn => {
                if on {
                    Repaint::PrepareDraw
                } else {
                    Repaint::Draw
                }
            }
            ControlCommand::ToggleLog(axis) => {
                self.log_axes.set(axis, on);
                self.get_range(AxisSelection::Both);
                Repaint::PrepareDraw
            }
            ControlCommand::MajorGrid(axis) => {
                if !on {
                    self.controls.set(ControlId::MinorGrid(axis), false);
                }
                Repaint::Refresh
            }
            ControlCommand::MinorGrid(axis) => {
                if on {
                    self.controls.set(ControlId::MajorGrid(axis), true);
                }
                Repaint::Refresh
            }
            ControlCommand::PlayMovie { forward } => {
                self.play_movie(forward)?;
                Repaint::None
            }
            ControlCommand::PreviousView => match self.history.go_back().cloned() {
                Some(previous) => {
                    self.restore_config(&previous);
                    Repaint::PrepareDraw
                }
                None => Repaint::Refresh,
            },
            ControlCommand::SaveImage => {
                self.save_image()?;
                Repaint::None
            }
            ControlCommand::ZoomOut(selection) => {
                self.get_range(selection);
                Repaint::PrepareDraw
            }
            ControlCommand::Jump { axis, screens } => {
                let width = self.ranges.range(axis).width();
                self.ranges.range_jump(axis, screens * width);
                Repaint::PrepareDraw
            }
            ControlCommand::MarkerRadius(delta) => {
                self.style.marker_radius = (self.style.marker_radius + delta).max(MIN_SIZE);
                Repaint::Draw
            }
            ControlCommand::OutlineWidth(delta) => {
                self.style.marker_outline_width =
                    (self.style.marker_outline_width + delta).max(MIN_SIZE);
                Repaint::Draw
            }
            ControlCommand::LineWidth(delta) => {
                self.style.line_width = (self.style.line_width + delta).max(MIN_SIZE);
                // The clip margin follows the line width.
                Repaint::PrepareDraw
            }
            ControlCommand::RestoreDefaults => {
                self.restore_defaults();
                Repaint::PrepareDraw
            }
        };
        Ok(level)
    }

    /// Default colors, marker and line parameters: markers on, outlines and
    /// lines off. Does not redraw.
    pub fn restore_defaults(&mut self) {
        self.style = self.config.series_style();
        self.reset_colors();
        self.controls.set(ControlId::Markers, true);
        self.controls.set(ControlId::Outlines, false);
        self.controls.set(ControlId::Lines, false);
    }

    /// Hands the whole window, drawn without controls or status text, to the
    /// image exporter and reports the outcome on the status line.
    pub fn save_image(&mut self) -> PlotResult<()> {
        let Some(mut exporter) = self.services.exporter.take() else {
            warn!("save image requested without an image exporter");
            self.status = "No image exporter available".to_owned();
            self.status_forced = true;
            return self.refresh();
        };

        let inside = self.interaction.pointer_inside();
        let help = self.controls.is_on(ControlId::Help);
        let status = std::mem::take(&mut self.status);
        self.interaction.set_inside(false);
        self.controls.set(ControlId::Help, false);
        let captured = self.compose();
        self.interaction.set_inside(inside);
        self.controls.set(ControlId::Help, help);
        self.status = status;

        let exported = captured.and_then(|frame| {
            exporter.export(
                &frame,
                ClipRect::whole(self.viewport),
                &self.config.export_base_name,
            )
        });
        self.services.exporter = Some(exporter);
        self.status = match exported {
            Ok(path) => {
                debug!(path = %path.display(), "image saved");
                "Done saving image".to_owned()
            }
            Err(err) => {
                warn!(error = %err, "image export failed");
                format!("Failed to save image: {err}")
            }
        };
        self.status_forced = true;
        self.refresh()
    }
}
