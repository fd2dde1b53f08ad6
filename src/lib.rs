//! # hex-merge
//!
//! Engine for a single-player hexagonal merging puzzle.
//!
//! Tokens of a color and level are placed on a hex board from a rotating
//! preview queue. Three or more connected tokens of the same color and level
//! merge into one token of the next level, and merges cascade. The game ends
//! when the board is full.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: The merge engine returns state deltas and board
//!    snapshots. Rendering happens afterwards, through a [`Presenter`].
//!
//! 2. **Deterministic**: Token draws come from a seedable ChaCha stream and
//!    cascades resolve synchronously, so a seed and a list of selections
//!    replay exactly.
//!
//! 3. **Collaborators at the edges**: Result attestation is a trait called
//!    once per game. Its failures are logged and never touch gameplay.
//!
//! ## Modules
//!
//! - `core`: Coordinates, tokens, RNG, configuration
//! - `board`: Hex board geometry and occupancy
//! - `queue`: Token generation and the preview queue
//! - `engine`: Placement, connected groups, cascades, scoring
//! - `session`: Game orchestration and collaborator traits
//! - `error`: Error types

pub mod board;
pub mod core;
pub mod engine;
pub mod error;
pub mod queue;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Color, GameConfig, GameRng, GameRngState, Hex, HexDirection, Token};

pub use crate::board::{Board, Cell};

pub use crate::queue::{TokenGenerator, TokenQueue};

pub use crate::engine::{GameResult, MergeEngine, MergeStep, Phase, Placement, Scoreboard};

pub use crate::session::{
    Attestation, GameSession, InMemoryLedger, NullPresenter, Offline, PlayerId, Presenter,
    ReportReceipt,
};

pub use crate::error::{AttestationError, ConfigError, GameError};
