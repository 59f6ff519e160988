use serde::{Deserialize, Serialize};

use crate::models::LayoutDirection;

/// The persisted UI-preferences record.
///
/// Stored under [`crate::config::CONFIG_STORAGE_KEY`] as JSON and rewritten
/// in place on every toggle. All three fields are always populated; a missing
/// or malformed storage entry falls back to [`UiConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Graph orientation in the visualization view.
    pub layout: LayoutDirection,
    /// Whether graph nodes start expanded.
    pub expand: bool,
    /// Whether canvas controls are shown.
    pub controls: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: LayoutDirection::Left,
            expand: true,
            controls: true,
        }
    }
}

impl UiConfig {
    /// Advance the layout through its fixed rotation cycle.
    pub fn cycle_layout(&mut self) {
        self.layout = self.layout.next();
    }

    /// Flip visibility of the canvas controls.
    pub fn toggle_controls(&mut self) {
        self.controls = !self.controls;
    }

    /// Flip the expand/collapse preference.
    pub fn toggle_expand(&mut self) {
        self.expand = !self.expand;
    }
}
