use tracing::{debug, trace};

use crate::controls::{ControlId, Visibility};
use crate::core::{
    Axis, AxisSelection, ClipRect, CoordinateTransform, PixelPoint, PlotBounds, SavedConfig,
    SeriesStyle, TickAxis,
};
use crate::error::{PlotError, PlotResult};
use crate::extensions::{GraphContext, GraphEvent};
use crate::interaction::SelectionOverlay;
use crate::render::{
    Color, DrawCommand, DrawFlags, LinePrimitive, MarkerStyle, PolylineStyle, RectPrimitive,
    RenderFrame, Renderer, SeriesPaint, TextHAlign, TextPrimitive,
};

use super::GraphViewport;
use super::label_format::format_significant;

/// About this many major ticks per axis.
const TICK_TARGET: usize = 3;
const MAJOR_GRID_WIDTH: f64 = 2.0;
const MINOR_GRID_WIDTH: f64 = 1.0;
const TICK_LABEL_DIGITS: usize = 6;
/// Gap between Y tick labels and the plot edge.
const TICK_LABEL_GAP: f64 = 3.0;
/// Tick label font is the largest one fitting this sample in the label box.
const TICK_LABEL_SAMPLE: &str = "moo";
const TICK_LABEL_HEIGHT_RATIO: f64 = 0.6;
const STATUS_HEIGHT_RATIO: f64 = 0.65;
const BACKGROUND: Color = Color::WHITE;
const FOREGROUND: Color = Color::BLACK;
const OVERLAY_WIDTH: f64 = 1.0;

/// How much work a state change needs before it shows up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub(super) enum Repaint {
    #[default]
    None,
    /// Compose and render; no history snapshot.
    Refresh,
    /// Refresh, then snapshot the view unless it was a small move.
    Draw,
    /// Recompute geometry, then draw.
    PrepareDraw,
}

impl<R: Renderer> GraphViewport<R> {
    /// Recomputes bounds, scale and every series batch for the current
    /// view. Does not draw.
    pub fn prepare(&mut self) {
        self.bounds = PlotBounds::from_viewport(self.viewport);
        self.clip = Some(self.bounds.clip_rect());
        self.ranges.ensure_overlap();
        self.transform = CoordinateTransform::new(self.bounds, &self.ranges);
        let flags = self.draw_flags();
        self.batches = self.pool.prepare(
            &self.series,
            self.log_axes,
            &self.transform,
            self.style.line_width,
            &flags,
        );
        let context = self.plugin_context();
        for (index, plugin) in self.plugins.iter_mut().enumerate() {
            if self.controls.is_on(ControlId::Plugin(index)) {
                plugin.on_event(GraphEvent::Prepare, &context);
            }
        }
    }

    /// Renders the current state and records it in the view history unless
    /// the last change was a small move.
    pub fn draw(&mut self) -> PlotResult<()> {
        self.refresh()?;
        if !self.interaction.small_move() {
            let snapshot = self.current_config();
            self.history.record(snapshot);
        }
        Ok(())
    }

    /// Recomputes geometry, then draws.
    pub fn prepare_draw(&mut self) -> PlotResult<()> {
        self.prepare();
        self.draw()
    }

    /// Renders the current state without touching the view history.
    pub fn refresh(&mut self) -> PlotResult<()> {
        let frame = self.compose()?;
        self.renderer.render(&frame)?;
        self.drawn = true;
        trace!(commands = frame.commands.len(), "graph frame rendered");
        Ok(())
    }

    pub(super) fn repaint(&mut self, level: Repaint) -> PlotResult<()> {
        match level {
            Repaint::None => Ok(()),
            Repaint::Refresh => self.refresh(),
            Repaint::Draw => self.draw(),
            Repaint::PrepareDraw => self.prepare_draw(),
        }
    }

    /// Builds the ordered frame for the current state.
    pub fn compose(&mut self) -> PlotResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        frame.push(DrawCommand::Rect(RectPrimitive::filled(
            ClipRect::whole(self.viewport),
            BACKGROUND,
        )));
        self.plugin_draw_hook(&mut frame, false);

        frame.push(DrawCommand::Clip(self.clip));
        let outlined = self.controls.is_on(ControlId::Outlines);
        let stats = self.batcher.emit(
            &mut frame,
            &self.batches,
            &self.series_order,
            |series| self.series_paint(series, outlined),
        );
        frame.push(DrawCommand::Clip(None));
        self.plugin_draw_hook(&mut frame, true);

        frame.push(DrawCommand::Rect(RectPrimitive::outlined(
            self.bounds.clip_rect(),
            FOREGROUND,
            self.config.border_width,
        )));
        self.push_grid(&mut frame);
        self.push_status(&mut frame)?;
        if self.interaction.pointer_inside() {
            self.push_controls(&mut frame);
        } else {
            self.push_tick_labels(&mut frame)?;
        }
        self.push_overlay(&mut frame);
        debug!(
            commands = frame.commands.len(),
            marker_requests = stats.marker_requests,
            polyline_requests = stats.polyline_requests,
            markers = stats.markers,
            vertices = stats.vertices,
            "graph frame composed"
        );
        Ok(frame)
    }

    fn series_paint(&self, series: usize, outlined: bool) -> SeriesPaint {
        let color = self.series_color(series);
        SeriesPaint {
            flags: DrawFlags {
                markers: self.do_markers(series),
                lines: self.do_lines(series),
            },
            marker: MarkerStyle {
                radius: self.style.marker_radius,
                outline_width: self.style.marker_outline_width,
                outlined,
                color,
            },
            line: PolylineStyle {
                width: self.style.line_width,
                line_style: self.style.line_style,
                color,
            },
        }
    }

    fn plugin_draw_hook(&mut self, frame: &mut RenderFrame, after_series: bool) {
        let context = self.plugin_context();
        for (index, plugin) in self.plugins.iter_mut().enumerate() {
            if !self.controls.is_on(ControlId::Plugin(index)) {
                continue;
            }
            let event = if after_series {
                GraphEvent::Draw(&mut *frame)
            } else {
                GraphEvent::PreDraw(&mut *frame)
            };
            plugin.on_event(event, &context);
        }
    }

    fn push_grid(&self, frame: &mut RenderFrame) {
        for axis in Axis::BOTH {
            if !self.controls.is_on(ControlId::MajorGrid(axis)) {
                continue;
            }
            let minor = self.controls.is_on(ControlId::MinorGrid(axis));
            let range = self.ranges.range(axis);
            let across = self.bounds.span(axis.other());
            let log = self.log_axes.get(axis);
            let ticks = TickAxis::new(range.low(), range.high(), TICK_TARGET, log);
            for tick in ticks.ticks().filter(|tick| tick.is_major || minor) {
                let at = self.transform.coord(axis, tick.position);
                let (from, to) = match axis {
                    Axis::X => ((at, across.low), (at, across.high)),
                    Axis::Y => ((across.low, at), (across.high, at)),
                };
                let width = if tick.is_major {
                    MAJOR_GRID_WIDTH
                } else {
                    MINOR_GRID_WIDTH
                };
                frame.push(DrawCommand::Line(
                    LinePrimitive::new(
                        PixelPoint::new(from.0, from.1),
                        PixelPoint::new(to.0, to.1),
                        width,
                        FOREGROUND,
                    )
                    .dashed(),
                ));
            }
        }
    }

    fn push_tick_labels(&self, frame: &mut RenderFrame) -> PlotResult<()> {
        let wanted: Vec<Axis> = Axis::BOTH
            .into_iter()
            .filter(|&axis| self.controls.is_on(ControlId::TickLabels(axis)))
            .collect();
        if wanted.is_empty() {
            return Ok(());
        }
        let Some(fonts) = self.services.fonts.as_deref() else {
            return Ok(());
        };
        let fit = fonts
            .fit(
                TICK_LABEL_SAMPLE,
                self.bounds.x.extent,
                self.bounds.y.low * TICK_LABEL_HEIGHT_RATIO,
            )
            .ok_or_else(|| {
                PlotError::ResourceUnavailable("no font fits the tick label box".to_owned())
            })?;
        for axis in wanted {
            let range = self.ranges.range(axis);
            let log = self.log_axes.get(axis);
            let ticks = TickAxis::new(range.low(), range.high(), TICK_TARGET, log);
            for tick in ticks.ticks().filter(|tick| tick.is_major) {
                let value = if log {
                    10f64.powf(tick.position)
                } else {
                    tick.position
                };
                let text = format_significant(value, TICK_LABEL_DIGITS);
                let at = self.transform.coord(axis, tick.position);
                let label = match axis {
                    Axis::X => TextPrimitive::new(
                        text,
                        at,
                        self.bounds.y.high + fit.height(),
                        fit.font_size_px,
                        FOREGROUND,
                        TextHAlign::Center,
                    ),
                    Axis::Y => TextPrimitive::new(
                        text,
                        self.bounds.x.low - TICK_LABEL_GAP,
                        fit.centered_baseline(at),
                        fit.font_size_px,
                        FOREGROUND,
                        TextHAlign::Right,
                    ),
                };
                frame.push(DrawCommand::Text(label));
            }
        }
        Ok(())
    }

    fn push_status(&self, frame: &mut RenderFrame) -> PlotResult<()> {
        let shown = self.status_forced
            || self.controls.is_on(ControlId::Help)
            || self.controls.is_on(ControlId::Coordinates);
        if !shown || self.status.is_empty() {
            return Ok(());
        }
        let Some(fonts) = self.services.fonts.as_deref() else {
            return Ok(());
        };
        let fit = fonts
            .fit(
                &self.status,
                self.bounds.x.extent,
                self.bounds.y.low * STATUS_HEIGHT_RATIO,
            )
            .ok_or_else(|| {
                PlotError::ResourceUnavailable(format!(
                    "no font fits status text of {} characters",
                    self.status.chars().count()
                ))
            })?;
        let middle = (self.bounds.y.low - self.config.border_width) / 2.0;
        frame.push(DrawCommand::Text(TextPrimitive::new(
            self.status.clone(),
            self.bounds.x.mid(),
            fit.centered_baseline(middle),
            fit.font_size_px,
            FOREGROUND,
            TextHAlign::Center,
        )));
        Ok(())
    }

    fn push_controls(&self, frame: &mut RenderFrame) {
        for (id, control) in self.controls.iter() {
            let color = match id {
                ControlId::Series(series) => self.series_color(series),
                _ => FOREGROUND,
            };
            control.draw(
                frame,
                &self.bounds,
                self.is_control_visible(id),
                color,
                BACKGROUND,
            );
        }
    }

    fn push_overlay(&self, frame: &mut RenderFrame) {
        match self.interaction.overlay() {
            Some(SelectionOverlay::RubberBand(rect)) => frame.push(DrawCommand::Rect(
                RectPrimitive::outlined(rect, FOREGROUND, OVERLAY_WIDTH),
            )),
            Some(SelectionOverlay::GuideLine { from, to }) => frame.push(DrawCommand::Line(
                LinePrimitive::new(from, to, self.config.border_width, FOREGROUND),
            )),
            None => {}
        }
    }

    /// Evaluates the visibility predicate of control `id`.
    #[must_use]
    pub fn is_control_visible(&self, id: ControlId) -> bool {
        let Some(control) = self.controls.get(id) else {
            return false;
        };
        let style = self.style;
        match control.visibility() {
            Visibility::Always => true,
            Visibility::PointerInside => self.interaction.pointer_inside(),
            Visibility::CanDoMarkers => self.can_do_markers(),
            Visibility::DoMarkers => self.any_markers(),
            Visibility::CanDoLines => self.can_do_lines(),
            Visibility::DoLines => self.any_lines(),
            Visibility::Zoomed(AxisSelection::Both) => self.ranges.any_zoomed(),
            Visibility::Zoomed(AxisSelection::X) => self.ranges.zoomed(Axis::X),
            Visibility::Zoomed(AxisSelection::Y) => self.ranges.zoomed(Axis::Y),
            Visibility::HistoryAvailable => self.history.can_go_back(),
            Visibility::MarkersShrinkable => self.any_markers() && style.marker_radius > 1.0,
            Visibility::OutlinesOn => self.outlines_active(),
            Visibility::OutlinesThinnable => {
                self.outlines_active() && style.marker_outline_width > 1.0
            }
            Visibility::LinesThinnable => self.any_lines() && style.line_width > 1.0,
            Visibility::DefaultsDiffer => self.defaults_differ(),
        }
    }

    fn outlines_active(&self) -> bool {
        self.any_markers() && self.controls.is_on(ControlId::Outlines)
    }

    /// `true` when restoring defaults would change colors, lines or markers.
    fn defaults_differ(&self) -> bool {
        let defaults = self.config.series_style();
        let lines_differ = self.colors_changed
            || self.controls.is_on(ControlId::Lines)
            || self.style.line_width != defaults.line_width;
        let markers_differ = !self.controls.is_on(ControlId::Markers)
            || self.controls.is_on(ControlId::Outlines)
            || self.style.marker_radius != defaults.marker_radius
            || self.style.marker_outline_width != defaults.marker_outline_width;
        (self.any_lines() && lines_differ) || (self.any_markers() && markers_differ)
    }

    /// Value snapshot of the current view.
    #[must_use]
    pub fn current_config(&self) -> SavedConfig {
        SavedConfig {
            style: self.style,
            series_order: self.series_order.clone(),
            range: self.ranges.ranges(),
            max_range: self.ranges.max_ranges(),
            zoomed: self.ranges.zoom_flags(),
            control_states: self
                .tracked
                .iter()
                .map(|&id| self.controls.is_on(id))
                .collect(),
        }
    }

    /// Reinstalls a saved view. Does not redraw.
    pub fn restore_config(&mut self, config: &SavedConfig) {
        self.style = config.style;
        if config.series_order.len() == self.series.len() {
            self.series_order.clone_from(&config.series_order);
        }
        self.ranges.restore(config.range, config.max_range);
        for (&id, &on) in self.tracked.iter().zip(&config.control_states) {
            self.controls.set(id, on);
        }
        debug!(
            x_low = config.range[0].low(),
            x_high = config.range[0].high(),
            y_low = config.range[1].low(),
            y_high = config.range[1].high(),
            "view restored"
        );
    }

    /// Replaces the marker and line parameters. Does not redraw.
    pub fn set_style(&mut self, style: SeriesStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn plugin_context(&self) -> GraphContext {
        GraphContext {
            bounds: self.bounds,
            range: self.ranges.ranges(),
            max_range: self.ranges.max_ranges(),
            zoomed: self.ranges.zoom_flags(),
            log_axes: self.log_axes,
            series_count: self.series.len(),
            pointer_inside: self.interaction.pointer_inside(),
        }
    }

    /// `true` once at least one frame reached the renderer.
    #[must_use]
    pub fn has_drawn(&self) -> bool {
        self.drawn
    }
}
