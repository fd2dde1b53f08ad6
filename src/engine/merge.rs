//! Placement, group discovery and cascading merges.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::outcome::{MergeStep, Phase, Placement, Scoreboard};
use crate::board::Board;
use crate::core::{GameConfig, Hex, Token};
use crate::error::GameError;

/// Smallest group that may merge. A lone token never merges with itself.
const MIN_MERGE_THRESHOLD: usize = 2;

/// Owns the board and applies the merge rules.
///
/// ## Rules
///
/// - A token may only be placed on an empty on-board cell.
/// - After a placement, the connected group of same-color same-level tokens
///   around the placed cell is found. If it has at least `merge_threshold`
///   cells, every cell but the placed one is cleared and the placed token
///   goes up one level.
/// - The check repeats at the same cell until the group is too small, so a
///   single placement can cascade through several levels.
/// - The game ends as soon as no empty cell remains.
///
/// Resolution is synchronous and deterministic: the same board and placement
/// always produce the same board, score and steps.
#[derive(Clone, Debug)]
pub struct MergeEngine {
    board: Board,
    scoreboard: Scoreboard,
    phase: Phase,
    merge_threshold: usize,
    points_per_level: u64,
}

impl MergeEngine {
    /// Create an engine over an empty board.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::from_board(Board::generate(config.board_radius), config)
    }

    /// Create an engine over a pre-populated board.
    ///
    /// A full board starts in [`Phase::GameOver`]. Merge thresholds below
    /// two are raised to two so every merge clears at least one cell.
    #[must_use]
    pub fn from_board(board: Board, config: &GameConfig) -> Self {
        let phase = if board.is_full() {
            Phase::GameOver
        } else {
            Phase::Active
        };
        Self {
            board,
            scoreboard: Scoreboard::default(),
            phase,
            merge_threshold: config.merge_threshold.max(MIN_MERGE_THRESHOLD),
            points_per_level: config.points_per_level,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Running totals.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
    }

    /// Check whether a placement at `hex` would be accepted.
    pub fn check_placement(&self, hex: Hex) -> Result<(), GameError> {
        if self.phase == Phase::GameOver {
            return Err(GameError::GameOver);
        }
        match self.board.get(hex) {
            None => Err(GameError::InvalidCoordinate(hex)),
            Some(cell) if !cell.is_empty() => Err(GameError::OccupiedCell(hex)),
            Some(_) => Ok(()),
        }
    }

    /// Place a token and resolve every merge it triggers.
    ///
    /// Rejected placements leave the engine untouched.
    pub fn place(&mut self, hex: Hex, token: Token) -> Result<Placement, GameError> {
        self.check_placement(hex)?;

        self.board.set_token(hex, Some(token))?;
        self.scoreboard.moves = self.scoreboard.moves.saturating_add(1);
        debug!(%hex, %token, moves = self.scoreboard.moves, "token placed");

        let steps = self.resolve_merges(hex)?;
        let score_delta: u64 = steps.iter().map(|s| s.points).sum();

        let game_over = self.is_game_over();
        if game_over {
            self.phase = Phase::GameOver;
            info!(
                score = self.scoreboard.score,
                moves = self.scoreboard.moves,
                max_level = self.scoreboard.max_level,
                "board full, game over"
            );
        }

        Ok(Placement {
            hex,
            token,
            steps,
            score_delta,
            game_over,
        })
    }

    /// Merge repeatedly at `origin` until its group is below the threshold.
    ///
    /// Each step is fully applied before the next group is searched. Returns
    /// no steps, and changes nothing, when the first group is too small.
    pub fn resolve_merges(&mut self, origin: Hex) -> Result<Vec<MergeStep>, GameError> {
        if !self.board.contains(origin) {
            return Err(GameError::InvalidCoordinate(origin));
        }

        let mut steps = Vec::new();

        // Terminates: threshold >= 2, so every step clears at least one cell.
        while let Some(token) = self.board.token_at(origin) {
            let group = self.connected_group(origin);
            if group.len() < self.merge_threshold {
                break;
            }

            let absorbed: Vec<Hex> = group.iter().copied().filter(|&h| h != origin).collect();
            for &hex in &absorbed {
                self.board.set_token(hex, None)?;
            }

            let new_token = token.promoted();
            self.board.set_token(origin, Some(new_token))?;
            self.scoreboard.max_level = self.scoreboard.max_level.max(new_token.level());

            let points = u64::from(new_token.level())
                .saturating_mul(group.len() as u64)
                .saturating_mul(self.points_per_level);
            self.scoreboard.score = self.scoreboard.score.saturating_add(points);

            debug!(
                %origin,
                group_size = group.len(),
                level = new_token.level(),
                points,
                "merged"
            );

            steps.push(MergeStep {
                origin,
                group,
                absorbed,
                new_token,
                points,
                board: self.board.clone(),
            });
        }

        Ok(steps)
    }

    /// Cells connected to `origin` through tokens matching its color and level.
    ///
    /// Empty cells and non-matching tokens are never crossed. The origin
    /// comes first; an empty or off-board origin yields an empty group.
    #[must_use]
    pub fn connected_group(&self, origin: Hex) -> Vec<Hex> {
        let Some(target) = self.board.token_at(origin) else {
            return Vec::new();
        };

        let mut group = Vec::new();
        let mut visited = FxHashSet::default();
        let mut stack = vec![origin];

        while let Some(hex) = stack.pop() {
            if !visited.insert(hex) {
                continue;
            }
            match self.board.token_at(hex) {
                Some(token) if token.matches(target) => {
                    group.push(hex);
                    stack.extend(
                        self.board
                            .neighbor_coords(hex)
                            .into_iter()
                            .filter(|n| !visited.contains(n)),
                    );
                }
                _ => {}
            }
        }

        group
    }
}
