use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::controls::ControlId;
use crate::core::{Axis, ClipRect, PixelPoint, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::extensions::{GraphEvent, PointerInput, PointerPhase};
use crate::interaction::{
    GestureClass, Key, KeyEvent, Modifiers, PointerEvent, SelectionOverlay,
};
use crate::render::Renderer;

use super::GraphViewport;
use super::label_format::{format_significant, round_to_resolution};
use super::render_controller::Repaint;

const COORDINATE_DIGITS: usize = 12;
/// Distance of the select guide line from the plot edge, in border widths.
const GUIDE_OFFSET_BORDERS: f64 = 2.0;

impl<R: Renderer> GraphViewport<R> {
    /// Button press: controls first, then plugins, then the gesture opens.
    pub fn pointer_press(&mut self, event: PointerEvent) -> PlotResult<()> {
        self.interaction.on_pointer_move(event.position);
        let Some(class) = self.interaction.on_press(event) else {
            return Ok(());
        };
        trace!(?class, x = event.position.x, y = event.position.y, "pointer press");
        if class != GestureClass::Center && self.series_control_at(event.position).is_some() {
            // Released on the same control, this opens the color chooser.
            return Ok(());
        }
        if let Some(level) = self.press_controls(event.position)? {
            return self.repaint(level);
        }
        self.offer_plugins(PointerInput {
            phase: PointerPhase::Press,
            position: event.position,
            button: Some(event.button),
            modifiers: event.modifiers,
        });
        Ok(())
    }

    /// Pointer motion, with or without a button held.
    pub fn pointer_motion(&mut self, position: PixelPoint, modifiers: Modifiers) -> PlotResult<()> {
        self.interaction.on_pointer_move(position);
        let click = self.interaction.click();
        if let Some(click) = click
            && click.class != GestureClass::Center
            && self.series_control_at(click.position).is_some()
        {
            return Ok(());
        }
        let consumed = self.offer_plugins(PointerInput {
            phase: PointerPhase::Motion,
            position,
            button: None,
            modifiers,
        });
        let status_changed = !consumed && self.update_status(position);
        let idle_repaint = if status_changed {
            Repaint::Refresh
        } else {
            Repaint::None
        };

        let Some(click) = click else {
            return self.repaint(idle_repaint);
        };
        if consumed || self.controls.hit_test(&self.bounds, click.position).is_some() {
            return self.repaint(idle_repaint);
        }

        let before = self.ranges;
        let last = self.interaction.last_motion();
        self.interaction.mark_moved();
        let affected = self.gesture_axes(click.position);
        match click.class {
            GestureClass::Scroll => {
                for &axis in &affected {
                    let sign = if axis == Axis::Y { 1.0 } else { -1.0 };
                    let delta = position.get(axis) - last.get(axis);
                    self.ranges
                        .range_jump(axis, sign * delta / self.transform.scale(axis));
                }
            }
            GestureClass::Zoom => {
                for &axis in &affected {
                    let sign = if axis == Axis::Y { 1.0 } else { -1.0 };
                    let range = self.ranges.range(axis);
                    let delta = position.get(axis) - last.get(axis);
                    let change = sign * range.width() * delta / self.bounds.span(axis).extent;
                    self.ranges
                        .set_range(axis, range.low() - change, range.high() + change);
                }
            }
            GestureClass::Center => {
                let overlay = self.selection_overlay(click.position, position);
                self.interaction.set_overlay(Some(overlay));
            }
        }
        self.interaction.set_last_motion(position);

        if self.ranges.differs_from(&before) {
            self.interaction.set_small_move(true);
            self.prepare_draw()
        } else {
            self.refresh()
        }
    }

    /// Button release: closes the gesture opened by the matching press.
    pub fn pointer_release(&mut self, event: PointerEvent) -> PlotResult<()> {
        self.interaction.on_pointer_move(event.position);
        let moved = self.interaction.moved();
        let Some(click) = self.interaction.finish() else {
            return Ok(());
        };
        if click.class != GestureClass::Center
            && let Some(series) = self.series_control_at(click.position)
        {
            return self.choose_color(series);
        }
        // Controls see the release where the press happened.
        if let Some(level) = self.release_controls(click.position)? {
            return self.repaint(level);
        }
        if self.offer_plugins(PointerInput {
            phase: PointerPhase::Release,
            position: event.position,
            button: Some(event.button),
            modifiers: event.modifiers,
        }) {
            return Ok(());
        }

        let before = self.ranges;
        let affected = self.gesture_axes(click.position);
        if moved {
            if click.class == GestureClass::Center {
                for &axis in &affected {
                    let from = self.transform.icoord(axis, click.position.get(axis));
                    let to = self.transform.icoord(axis, event.position.get(axis));
                    self.ranges.set_range(axis, from.min(to), from.max(to));
                }
            }
        } else if click.class != GestureClass::Scroll {
            let factor = click.zoom_factor();
            for &axis in &affected {
                if click.class == GestureClass::Center && !self.ranges.zoomed(axis) {
                    continue;
                }
                let half = 0.5 * self.ranges.range(axis).width() * factor;
                let mid = self.transform.icoord(axis, click.position.get(axis));
                let max = self.ranges.max_range(axis);
                self.ranges.set_range(
                    axis,
                    (mid - half).max(max.low()),
                    (mid + half).min(max.high()),
                );
            }
        }

        if self.ranges.differs_from(&before) || self.interaction.small_move() {
            self.interaction.set_small_move(false);
            debug!(class = ?click.class, moved, "gesture changed the view");
            self.prepare_draw()
        } else if moved {
            self.refresh()
        } else {
            Ok(())
        }
    }

    /// Arrow keys pan; `c`/`C` cycle the color of the series control under
    /// the pointer.
    pub fn key_press(&mut self, event: KeyEvent) -> PlotResult<()> {
        let (axis, sign) = match event.key {
            Key::Left => (Axis::X, -1.0),
            Key::Right => (Axis::X, 1.0),
            Key::Down => (Axis::Y, -1.0),
            Key::Up => (Axis::Y, 1.0),
            Key::Char(letter @ ('c' | 'C')) => {
                let Some(series) = self.series_control_at(event.position) else {
                    return Ok(());
                };
                let color = self.next_cycle_color(letter == 'c');
                return self.set_color(series, color);
            }
            Key::Char(_) => return Ok(()),
        };
        let width = self.ranges.range(axis).width();
        let distance = match (event.modifiers.shift, event.modifiers.control) {
            (true, true) => width,
            (true, false) => 0.05 * width,
            (false, true) => 0.5 * width,
            (false, false) => 1.0 / self.transform.scale(axis),
        };
        let before = self.ranges;
        self.ranges.range_jump(axis, sign * distance);
        if self.ranges.differs_from(&before) {
            self.prepare_draw()
        } else {
            Ok(())
        }
    }

    pub fn pointer_enter(&mut self) -> PlotResult<()> {
        self.interaction.on_pointer_enter();
        self.refresh()
    }

    /// Pointer left the window: controls hide and tick labels show.
    pub fn pointer_leave(&mut self) -> PlotResult<()> {
        self.interaction.on_pointer_leave();
        self.refresh()
    }

    /// New window size; geometry is recomputed and drawn.
    pub fn resize(&mut self, viewport: Viewport) -> PlotResult<()> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.config.viewport = viewport;
        debug!(width = viewport.width, height = viewport.height, "graph resized");
        self.prepare_draw()
    }

    /// Window needs repainting.
    pub fn expose(&mut self) -> PlotResult<()> {
        self.draw()
    }

    /// Recomputes the status line for a pointer at `position`.
    ///
    /// Returns whether the text or its forced flag changed.
    pub(super) fn update_status(&mut self, position: PixelPoint) -> bool {
        let hovered = self.controls.hit_test(&self.bounds, position);
        let help = self.controls.is_on(ControlId::Help);
        let forced = !help && hovered == Some(ControlId::Help);
        let text = if forced {
            self.control_status(ControlId::Help)
        } else if help {
            match hovered {
                Some(id) => self.control_status(id),
                None => long_status(
                    self.bounds.contains(position),
                    self.transform.quadrant(position).axis(),
                ),
            }
        } else if self.controls.is_on(ControlId::Coordinates) {
            self.coordinates_text(position)
        } else {
            String::new()
        };
        let changed = text != self.status || forced != self.status_forced;
        self.status = text;
        self.status_forced = forced;
        changed
    }

    fn control_status(&self, id: ControlId) -> String {
        let Some(control) = self.controls.get(id) else {
            return String::new();
        };
        if self.is_control_visible(id) {
            control.description().to_owned()
        } else {
            format!("{} (inactive)", control.description())
        }
    }

    /// `( x , y )` data coordinates of a pixel, rounded to the resolution
    /// of one pixel.
    #[must_use]
    pub fn coordinates_text(&self, position: PixelPoint) -> String {
        let [x, y] = Axis::BOTH.map(|axis| {
            let value = self.transform.icoord(axis, position.get(axis));
            let resolution =
                self.ranges.range(axis).width() / self.bounds.span(axis).extent;
            let value = round_to_resolution(value, resolution);
            let value = if self.log_axes.get(axis) {
                10f64.powf(value)
            } else {
                value
            };
            format_significant(value, COORDINATE_DIGITS)
        });
        format!("( {x} , {y} )")
    }

    fn press_controls(&mut self, point: PixelPoint) -> PlotResult<Option<Repaint>> {
        let bounds = self.bounds;
        let ids: Vec<ControlId> = self.controls.ids().collect();
        for id in ids {
            let visible = self.is_control_visible(id);
            let Some(control) = self.controls.get_mut(id) else {
                continue;
            };
            let response = control.press(&bounds, point, visible);
            if response.hit {
                debug!(?id, visible, "control pressed");
                return match response.command {
                    Some(command) => self.execute_command(id, command).map(Some),
                    None => Ok(Some(Repaint::Refresh)),
                };
            }
        }
        Ok(None)
    }

    fn release_controls(&mut self, point: PixelPoint) -> PlotResult<Option<Repaint>> {
        let bounds = self.bounds;
        let ids: Vec<ControlId> = self.controls.ids().collect();
        for id in ids {
            let Some(control) = self.controls.get_mut(id) else {
                continue;
            };
            let response = control.release(&bounds, point);
            if response.hit {
                debug!(?id, "control released");
                return match response.command {
                    Some(command) => self.execute_command(id, command).map(Some),
                    None => Ok(Some(Repaint::Refresh)),
                };
            }
        }
        Ok(None)
    }

    fn offer_plugins(&mut self, input: PointerInput) -> bool {
        let context = self.plugin_context();
        for (index, plugin) in self.plugins.iter_mut().enumerate() {
            if self.controls.is_on(ControlId::Plugin(index))
                && plugin.on_event(GraphEvent::Pointer(input), &context)
            {
                trace!(plugin = plugin.id(), phase = ?input.phase, "pointer consumed by plugin");
                return true;
            }
        }
        false
    }

    fn series_control_at(&self, point: PixelPoint) -> Option<usize> {
        match self.controls.hit_test(&self.bounds, point) {
            Some(ControlId::Series(series)) => Some(series),
            _ => None,
        }
    }

    /// Both axes inside the plot region, otherwise the axis of the region
    /// the press landed in.
    fn gesture_axes(&self, press: PixelPoint) -> SmallVec<[Axis; 2]> {
        if self.bounds.contains(press) {
            SmallVec::from_slice(&Axis::BOTH)
        } else {
            SmallVec::from_slice(&[self.transform.quadrant(press).axis()])
        }
    }

    fn selection_overlay(&self, press: PixelPoint, current: PixelPoint) -> SelectionOverlay {
        if self.bounds.contains(press) {
            return SelectionOverlay::RubberBand(ClipRect::new(
                press.x.min(current.x),
                press.y.min(current.y),
                (current.x - press.x).abs(),
                (current.y - press.y).abs(),
            ));
        }
        let quadrant = self.transform.quadrant(press);
        let axis = quadrant.axis();
        let across = self.bounds.span(axis.other());
        let offset = GUIDE_OFFSET_BORDERS * self.config.border_width;
        let at = if quadrant.is_far_edge() {
            across.high + offset
        } else {
            across.low - offset
        };
        let mut from = PixelPoint::default();
        let mut to = PixelPoint::default();
        from.set(axis, press.get(axis));
        to.set(axis, current.get(axis));
        from.set(axis.other(), at);
        to.set(axis.other(), at);
        SelectionOverlay::GuideLine { from, to }
    }

    fn choose_color(&mut self, series: usize) -> PlotResult<()> {
        let Some(mut chooser) = self.services.color_chooser.take() else {
            return Ok(());
        };
        let current = self.series_colors[series];
        let picked = chooser.choose(series, current, &self.palette);
        self.services.color_chooser = Some(chooser);
        match picked {
            Some(color) => self.set_color(series, color),
            None => Ok(()),
        }
    }
}

/// Gesture help for a pointer in the plot region or next to one axis.
#[must_use]
pub fn long_status(in_plot: bool, axis: Axis) -> String {
    let target = match (in_plot, axis) {
        (true, _) => "X and Y axes",
        (false, Axis::X) => "X axis",
        (false, Axis::Y) => "Y axis",
    };
    format!(
        "Pointer clicks (1: center, 3/control: zoom out, wheel: zoom) and drags \
         (1: select, 2/shift: scroll, 3/control: zoom) for {target}"
    )
}
