//! Merge engine: placement, connected groups, cascades, scoring and the
//! game-over rule.
//!
//! ## Example
//!
//! ```
//! use hex_merge::core::{GameConfig, Hex, Token};
//! use hex_merge::engine::MergeEngine;
//!
//! let mut engine = MergeEngine::new(&GameConfig::default());
//! engine.place(Hex::new(1, 0), Token::red(1)).unwrap();
//! engine.place(Hex::new(0, 1), Token::red(1)).unwrap();
//!
//! // The third matching token merges the group into the placed cell
//! let placement = engine.place(Hex::ORIGIN, Token::red(1)).unwrap();
//! assert_eq!(placement.final_token(), Token::red(2));
//! assert_eq!(placement.score_delta, 60);
//! ```

mod merge;
mod outcome;

pub use merge::MergeEngine;
pub use outcome::{GameResult, MergeStep, Phase, Placement, Scoreboard};
