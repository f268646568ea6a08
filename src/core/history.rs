use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisRange, SeriesStyle};

/// Value snapshot of everything the "previous view" control restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfig {
    pub style: SeriesStyle,
    pub series_order: Vec<usize>,
    pub range: [AxisRange; 2],
    pub max_range: [AxisRange; 2],
    pub zoomed: [bool; 2],
    /// Toggle states of the tracked controls, in tracking order.
    pub control_states: Vec<bool>,
}

/// Ordered undo stack of view snapshots, newest at the back.
#[derive(Debug, Clone, Default)]
pub struct ViewHistory {
    entries: VecDeque<SavedConfig>,
}

impl ViewHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&SavedConfig> {
        self.entries.back()
    }

    /// `true` when a previous view exists to go back to.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Appends `config` unless it equals the newest entry.
    ///
    /// Returns whether an entry was appended.
    pub fn record(&mut self, config: SavedConfig) -> bool {
        if self.entries.back() == Some(&config) {
            return false;
        }
        self.entries.push_back(config);
        debug!(entries = self.entries.len(), "view history snapshot recorded");
        true
    }

    /// Drops the newest entry and returns the one now at the back.
    ///
    /// Does nothing unless at least two entries exist.
    pub fn go_back(&mut self) -> Option<&SavedConfig> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop_back();
        debug!(entries = self.entries.len(), "view history stepped back");
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedConfig> {
        self.entries.iter()
    }
}
