use tracing::debug;

use crate::controls::ControlId;
use crate::error::PlotResult;
use crate::render::{Color, DrawFlags, Renderer};

use super::GraphViewport;

impl<R: Renderer> GraphViewport<R> {
    #[must_use]
    pub fn series_visible(&self, series: usize) -> bool {
        self.controls.is_on(ControlId::Series(series))
    }

    /// Shows or hides one series and recomputes geometry. Does not redraw.
    pub fn set_series_visible(&mut self, series: usize, visible: bool) -> PlotResult<()> {
        self.check_series(series)?;
        self.controls.set(ControlId::Series(series), visible);
        self.prepare();
        Ok(())
    }

    /// Forces markers on for `series` regardless of the global toggle and
    /// recomputes geometry. Does not redraw.
    pub fn set_series_only_markers(&mut self, series: usize, only: bool) -> PlotResult<()> {
        self.check_series(series)?;
        self.only_markers[series] = only;
        self.prepare();
        Ok(())
    }

    /// Forces lines on for `series` regardless of the global toggle and
    /// recomputes geometry. Does not redraw.
    pub fn set_series_only_lines(&mut self, series: usize, only: bool) -> PlotResult<()> {
        self.check_series(series)?;
        self.only_lines[series] = only;
        self.prepare();
        Ok(())
    }

    #[must_use]
    pub fn do_markers(&self, series: usize) -> bool {
        if !self.series_visible(series) {
            return false;
        }
        (self.controls.is_on(ControlId::Markers) && !self.only_lines[series])
            || self.only_markers[series]
    }

    #[must_use]
    pub fn do_lines(&self, series: usize) -> bool {
        if !self.series_visible(series) {
            return false;
        }
        (self.controls.is_on(ControlId::Lines) && !self.only_markers[series])
            || self.only_lines[series]
    }

    /// `true` when any series currently draws markers.
    #[must_use]
    pub fn any_markers(&self) -> bool {
        (0..self.series.len()).any(|series| self.do_markers(series))
    }

    /// `true` when any series currently draws lines.
    #[must_use]
    pub fn any_lines(&self) -> bool {
        (0..self.series.len()).any(|series| self.do_lines(series))
    }

    /// `true` when turning markers on would show something.
    #[must_use]
    pub fn can_do_markers(&self) -> bool {
        (0..self.series.len())
            .any(|series| self.series_visible(series) && !self.only_lines[series])
    }

    /// `true` when turning lines on would show something.
    #[must_use]
    pub fn can_do_lines(&self) -> bool {
        (0..self.series.len())
            .any(|series| self.series_visible(series) && !self.only_markers[series])
    }

    pub(super) fn draw_flags(&self) -> Vec<DrawFlags> {
        (0..self.series.len())
            .map(|series| DrawFlags {
                markers: self.do_markers(series),
                lines: self.do_lines(series),
            })
            .collect()
    }

    /// Moves `series` to the end of the draw order so it is drawn on top.
    pub fn bring_series_to_front(&mut self, series: usize) -> PlotResult<()> {
        self.check_series(series)?;
        self.series_order.retain(|&index| index != series);
        self.series_order.push(series);
        Ok(())
    }

    #[must_use]
    pub fn series_color(&self, series: usize) -> Color {
        self.palette
            .color(self.series_colors.get(series).copied().unwrap_or(series))
    }

    #[must_use]
    pub fn series_color_index(&self, series: usize) -> Option<usize> {
        self.series_colors.get(series).copied()
    }

    #[must_use]
    pub fn colors_changed(&self) -> bool {
        self.colors_changed
    }

    /// Recolors `series` with palette entry `color` and redraws.
    pub fn set_color(&mut self, series: usize, color: usize) -> PlotResult<()> {
        self.check_series(series)?;
        let color = color % self.palette.len();
        if color != series % self.palette.len() {
            self.colors_changed = true;
        }
        self.series_colors[series] = color;
        debug!(series, color, "series recolored");
        self.draw()
    }

    /// Gives every series its default palette entry. Does not redraw.
    pub fn reset_colors(&mut self) {
        for (series, color) in self.series_colors.iter_mut().enumerate() {
            *color = series;
        }
        self.colors_changed = false;
    }

    /// Advances the per-viewport color cycle and returns the color to use.
    pub(super) fn next_cycle_color(&mut self, forward: bool) -> usize {
        let len = self.palette.len();
        let color = self.color_cycle % len;
        self.color_cycle = if forward {
            (self.color_cycle + 1) % len
        } else {
            (self.color_cycle + len - 1) % len
        };
        color
    }
}
