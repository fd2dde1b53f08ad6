//! Game configuration.
//!
//! The defaults reproduce the classic game: a radius-3 board (37 cells), a
//! three-token preview queue, merges at groups of three and the 60/25/10/5
//! level distribution for new tokens.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Cumulative level thresholds for freshly drawn tokens.
///
/// Index `i` yields level `i + 1`: P(1)=0.60, P(2)=0.25, P(3)=0.10, P(4)=0.05.
pub const DEFAULT_LEVEL_THRESHOLDS: [f64; 4] = [0.60, 0.85, 0.95, 1.00];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board radius. The board holds `3R² + 3R + 1` cells.
    pub board_radius: u32,

    /// Number of upcoming tokens visible in the queue.
    pub queue_len: usize,

    /// Minimum connected group size that merges.
    pub merge_threshold: usize,

    /// Points per level per merged cell.
    pub points_per_level: u64,

    /// Cumulative level thresholds. Must be increasing and end at 1.0.
    pub level_thresholds: Vec<f64>,

    /// Root seed for token generation.
    /// Same seed produces the same series of games.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_radius: 3,
            queue_len: 3,
            merge_threshold: 3,
            points_per_level: 10,
            level_thresholds: DEFAULT_LEVEL_THRESHOLDS.to_vec(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the board radius.
    #[must_use]
    pub fn with_board_radius(mut self, radius: u32) -> Self {
        self.board_radius = radius;
        self
    }

    /// Set the queue length.
    #[must_use]
    pub fn with_queue_len(mut self, len: usize) -> Self {
        self.queue_len = len;
        self
    }

    /// Set the minimum merge group size.
    #[must_use]
    pub fn with_merge_threshold(mut self, threshold: usize) -> Self {
        self.merge_threshold = threshold;
        self
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the cumulative level thresholds.
    #[must_use]
    pub fn with_level_thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.level_thresholds = thresholds;
        self
    }

    /// Number of cells on a board of this radius.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let r = self.board_radius as usize;
        3 * r * r + 3 * r + 1
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_radius == 0 {
            return Err(ConfigError::Validation("board_radius must be > 0".into()));
        }
        if self.queue_len == 0 {
            return Err(ConfigError::Validation("queue_len must be > 0".into()));
        }
        if self.merge_threshold < 2 {
            return Err(ConfigError::Validation(
                "merge_threshold must be >= 2".into(),
            ));
        }
        if self.level_thresholds.is_empty() {
            return Err(ConfigError::Validation(
                "level_thresholds must not be empty".into(),
            ));
        }
        if self.level_thresholds.iter().any(|&t| !(t > 0.0 && t <= 1.0)) {
            return Err(ConfigError::Validation(
                "level_thresholds must lie in (0, 1]".into(),
            ));
        }
        if self.level_thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Validation(
                "level_thresholds must be strictly increasing".into(),
            ));
        }
        if self.level_thresholds.last().copied() != Some(1.0) {
            return Err(ConfigError::Validation(
                "level_thresholds must end at 1.0".into(),
            ));
        }
        Ok(())
    }
}
