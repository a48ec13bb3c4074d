use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLS, DEFAULT_FIT_FRACTION, DEFAULT_ROWS, DEFAULT_SNAP_DISTANCE};
use crate::error::ConfigError;
use crate::slicing::Grid;

/// Per-session tunables. Every field has a default so partial JSON works.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub rows: u32,
    pub cols: u32,
    pub fit_fraction: f64,
    /// Release distance under which the drag controller snaps a piece home.
    pub snap_distance: f64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            fit_fraction: DEFAULT_FIT_FRACTION,
            snap_distance: DEFAULT_SNAP_DISTANCE,
        }
    }
}

impl PuzzleConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: PuzzleConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(self.fit_fraction > 0.0 && self.fit_fraction <= 1.0) {
            return Err(ConfigError::InvalidFit(self.fit_fraction));
        }
        if !(self.snap_distance.is_finite() && self.snap_distance >= 0.0) {
            return Err(ConfigError::InvalidSnap(self.snap_distance));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid {
            rows: self.rows,
            cols: self.cols,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
