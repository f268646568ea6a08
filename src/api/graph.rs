use tracing::debug;

use crate::controls::{ControlId, ControlSet, builtin_controls, plugin_control, tracked_controls};
use crate::core::{
    Axis, AxisRange, AxisSelection, ClipRect, CoordinateTransform, LogAxes, PixelPoint,
    PlotBounds, RangeModel, SeriesSet, SeriesStyle, ViewHistory, Viewport,
};
use crate::error::{PlotError, PlotResult};
use crate::extensions::GraphPlugin;
use crate::interaction::InteractionState;
use crate::render::{DrawBatcher, Palette, PreparePool, RenderBatch, Renderer};

use super::{GraphConfig, GraphServices};

/// Interactive scatter/line graph bound to one drawing backend.
///
/// All state lives on the caller's thread; only the prepare pass fans out
/// to the worker pool, and it is joined before anything is drawn.
pub struct GraphViewport<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: GraphConfig,
    pub(super) services: GraphServices,
    pub(super) series: SeriesSet,
    pub(super) series_names: Vec<String>,
    pub(super) viewport: Viewport,
    pub(super) bounds: PlotBounds,
    pub(super) ranges: RangeModel,
    pub(super) transform: CoordinateTransform,
    pub(super) log_axes: LogAxes,
    pub(super) style: SeriesStyle,
    pub(super) controls: ControlSet,
    pub(super) tracked: Vec<ControlId>,
    pub(super) only_markers: Vec<bool>,
    pub(super) only_lines: Vec<bool>,
    pub(super) series_order: Vec<usize>,
    pub(super) palette: Palette,
    pub(super) series_colors: Vec<usize>,
    pub(super) colors_changed: bool,
    pub(super) color_cycle: usize,
    pub(super) pool: PreparePool,
    pub(super) batcher: DrawBatcher,
    pub(super) batches: Vec<RenderBatch>,
    pub(super) interaction: InteractionState,
    pub(super) history: ViewHistory,
    pub(super) status: String,
    pub(super) status_forced: bool,
    pub(super) plugins: Vec<Box<dyn GraphPlugin>>,
    pub(super) clip: Option<ClipRect>,
    pub(super) drawn: bool,
}

impl<R: Renderer> GraphViewport<R> {
    /// Builds a graph over `series` and computes its initial geometry.
    ///
    /// Nothing is drawn until `draw` or `expose`.
    pub fn new(
        renderer: R,
        series: SeriesSet,
        config: GraphConfig,
        services: GraphServices,
    ) -> PlotResult<Self> {
        config.validate()?;
        let count = series.len();
        let series_names: Vec<String> = (0..count)
            .map(|index| {
                config
                    .series_names
                    .get(index)
                    .cloned()
                    .or_else(|| series.get(index).map(|s| s.name().to_owned()))
                    .unwrap_or_else(|| (index + 1).to_string())
            })
            .collect();
        let palette = Palette::default();
        if palette.is_empty() {
            return Err(PlotError::ResourceUnavailable(
                "series palette is empty".to_owned(),
            ));
        }

        let bounds = PlotBounds::from_viewport(config.viewport);
        let ranges = RangeModel::default();
        let mut graph = Self {
            renderer,
            viewport: config.viewport,
            bounds,
            transform: CoordinateTransform::new(bounds, &ranges),
            ranges,
            log_axes: LogAxes::default(),
            style: config.series_style(),
            controls: builtin_controls(&series_names),
            tracked: tracked_controls(count),
            only_markers: vec![false; count],
            only_lines: vec![false; count],
            series_order: (0..count).collect(),
            palette,
            series_colors: (0..count).collect(),
            colors_changed: false,
            color_cycle: count,
            pool: PreparePool::new(config.worker_threads)?,
            batcher: DrawBatcher::new(config.max_request),
            batches: Vec::new(),
            interaction: InteractionState::default(),
            history: ViewHistory::new(),
            status: String::new(),
            status_forced: false,
            plugins: Vec::new(),
            clip: None,
            drawn: false,
            series,
            series_names,
            config,
            services,
        };
        graph.get_range(AxisSelection::Both);
        graph.prepare();
        debug!(
            series = count,
            width = graph.viewport.width,
            height = graph.viewport.height,
            threads = graph.pool.threads(),
            "graph viewport created"
        );
        Ok(graph)
    }

    /// Registers a plugin and its enable control.
    pub fn add_plugin(&mut self, plugin: Box<dyn GraphPlugin>) {
        let index = self.plugins.len();
        let control = plugin_control(index, plugin.description(), plugin.initially_enabled());
        debug!(plugin = plugin.id(), index, "plugin registered");
        self.controls.insert(ControlId::Plugin(index), control);
        self.plugins.push(plugin);
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn bounds(&self) -> PlotBounds {
        self.bounds
    }

    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        self.transform
    }

    #[must_use]
    pub fn ranges(&self) -> &RangeModel {
        &self.ranges
    }

    #[must_use]
    pub fn range(&self, axis: Axis) -> AxisRange {
        self.ranges.range(axis)
    }

    #[must_use]
    pub fn max_range(&self, axis: Axis) -> AxisRange {
        self.ranges.max_range(axis)
    }

    #[must_use]
    pub fn zoomed(&self, axis: Axis) -> bool {
        self.ranges.zoomed(axis)
    }

    #[must_use]
    pub fn log_axes(&self) -> LogAxes {
        self.log_axes
    }

    #[must_use]
    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn series_names(&self) -> &[String] {
        &self.series_names
    }

    #[must_use]
    pub fn series_order(&self) -> &[usize] {
        &self.series_order
    }

    #[must_use]
    pub fn batches(&self) -> &[RenderBatch] {
        &self.batches
    }

    #[must_use]
    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    #[must_use]
    pub fn control_on(&self, id: ControlId) -> bool {
        self.controls.is_on(id)
    }

    /// Current window position of a control.
    #[must_use]
    pub fn control_location(&self, id: ControlId) -> Option<PixelPoint> {
        self.controls
            .get(id)
            .map(|control| control.location(&self.bounds))
    }

    #[must_use]
    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn check_series(&self, series: usize) -> PlotResult<()> {
        if series >= self.series.len() {
            return Err(PlotError::InvalidData(format!(
                "series index {series} out of range (have {})",
                self.series.len()
            )));
        }
        Ok(())
    }
}
