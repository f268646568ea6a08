use indexmap::IndexMap;

use crate::controls::{ControlId, ToggleControl};
use crate::core::{PixelPoint, PlotBounds};

/// Controls of one viewport in dispatch priority order.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    controls: IndexMap<ControlId, ToggleControl>,
}

impl ControlSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `control` at the lowest priority, or replaces an existing
    /// control with the same id in place.
    pub fn insert(&mut self, id: ControlId, control: ToggleControl) -> Option<ToggleControl> {
        self.controls.insert(id, control)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ControlId) -> Option<&ToggleControl> {
        self.controls.get(&id)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut ToggleControl> {
        self.controls.get_mut(&id)
    }

    /// Toggle state of `id`; absent controls read as off.
    #[must_use]
    pub fn is_on(&self, id: ControlId) -> bool {
        self.controls.get(&id).is_some_and(ToggleControl::is_on)
    }

    /// Sets the state of `id` if present.
    pub fn set(&mut self, id: ControlId, on: bool) {
        if let Some(control) = self.controls.get_mut(&id) {
            control.set_on(on);
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.controls.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &ToggleControl)> {
        self.controls.iter().map(|(id, control)| (*id, control))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ControlId, &mut ToggleControl)> {
        self.controls.iter_mut().map(|(id, control)| (*id, control))
    }

    /// First control in priority order whose disc contains `point`.
    #[must_use]
    pub fn hit_test(&self, bounds: &PlotBounds, point: PixelPoint) -> Option<ControlId> {
        self.controls
            .iter()
            .find(|(_, control)| control.contains(bounds, point))
            .map(|(id, _)| *id)
    }
}
