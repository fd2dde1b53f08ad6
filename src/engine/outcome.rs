//! Values returned by the engine.
//!
//! The engine never renders anything. Instead it reports what changed, and
//! the session hands these values to the presentation layer after the call
//! returns.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Hex, Token};

/// Engine lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Placements are accepted.
    #[default]
    Active,
    /// The board filled up. Terminal.
    GameOver,
}

/// Running totals for one game.
///
/// Every field is monotonically non-decreasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Accumulated points.
    pub score: u64,
    /// Placements made.
    pub moves: u32,
    /// Highest level produced by a merge (starts at 1).
    pub max_level: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            moves: 0,
            max_level: 1,
        }
    }
}

impl Scoreboard {
    /// The reportable result of these totals.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult {
            points: self.score,
            moves: self.moves,
            level: self.max_level,
        }
    }
}

/// Final result of a completed game, as reported to attestation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// Final score.
    pub points: u64,
    /// Total placements.
    pub moves: u32,
    /// Highest level reached.
    pub level: u32,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} points in {} moves (level {})",
            self.points, self.moves, self.level
        )
    }
}

/// One merge within a cascade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStep {
    /// The surviving cell.
    pub origin: Hex,
    /// Every cell in the merged group, origin first.
    pub group: Vec<Hex>,
    /// Cells cleared by this merge (the group minus the origin).
    pub absorbed: Vec<Hex>,
    /// Token left at the origin.
    pub new_token: Token,
    /// Points awarded: `new_level * group_size * points_per_level`.
    pub points: u64,
    /// Board after this step.
    pub board: Board,
}

impl MergeStep {
    /// Number of cells merged.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group.len()
    }
}

/// Outcome of a single placement, including its full cascade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Where the token went.
    pub hex: Hex,
    /// The token that was placed.
    pub token: Token,
    /// Cascade steps in order. Empty when nothing merged.
    pub steps: Vec<MergeStep>,
    /// Total points gained by this placement.
    pub score_delta: u64,
    /// Whether this placement ended the game.
    pub game_over: bool,
}

impl Placement {
    /// Whether at least one merge happened.
    #[must_use]
    pub fn merged(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Token left at the placed cell after the cascade.
    #[must_use]
    pub fn final_token(&self) -> Token {
        self.steps.last().map_or(self.token, |s| s.new_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoreboard_defaults() {
        let board = Scoreboard::default();
        assert_eq!(board.score, 0);
        assert_eq!(board.moves, 0);
        assert_eq!(board.max_level, 1);
        assert_eq!(Phase::default(), Phase::Active);
    }

    #[test]
    fn test_result_from_scoreboard() {
        let board = Scoreboard {
            score: 150,
            moves: 5,
            max_level: 3,
        };
        let result = board.result();
        assert_eq!(result.points, 150);
        assert_eq!(result.moves, 5);
        assert_eq!(result.level, 3);
        assert_eq!(format!("{result}"), "150 points in 5 moves (level 3)");
    }

    #[test]
    fn test_placement_final_token() {
        let placement = Placement {
            hex: Hex::ORIGIN,
            token: Token::red(1),
            steps: vec![],
            score_delta: 0,
            game_over: false,
        };
        assert!(!placement.merged());
        assert_eq!(placement.final_token(), Token::red(1));
    }
}
