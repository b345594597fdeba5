//! Dashboard layout configuration.
//!
//! Layout knobs only: nothing here changes data semantics. Values come
//! from an optional JSON file (`--config`); missing fields fall back to
//! the defaults below.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Percentage of vertical space given to the timeline chart.
    pub lexis_height_pct: u16,
    /// Percentage of the bottom row given to the bar chart.
    pub bar_width_pct: u16,
    /// Width of each gender bar, in cells.
    pub bar_width: u16,
    /// Gap between gender bars, in cells.
    pub bar_gap: u16,
    /// Tooltip offset from the mouse position, in cells.
    pub tooltip_offset: (u16, u16),
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lexis_height_pct: 55,
            bar_width_pct: 35,
            bar_width: 9,
            bar_gap: 3,
            tooltip_offset: (2, 1),
        }
    }
}

impl DashboardConfig {
    /// Load a configuration file, erroring on unreadable or unknown input.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
