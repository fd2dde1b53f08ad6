//! Game session and its external collaborators.
//!
//! A [`GameSession`] wires the board, the token queue and the merge engine
//! together and talks to two collaborators:
//!
//! - a [`Presenter`], told about every visible state change
//! - an [`Attestation`] service, told about the final result of each game
//!
//! ## Example Usage
//!
//! ```
//! use hex_merge::core::{GameConfig, Hex};
//! use hex_merge::session::{GameSession, InMemoryLedger, NullPresenter, PlayerId};
//!
//! let mut session = GameSession::new(
//!     GameConfig::default().with_seed(7),
//!     PlayerId::new("player-one"),
//!     NullPresenter,
//!     InMemoryLedger::new(),
//! )
//! .unwrap();
//!
//! session.select_cell(Hex::ORIGIN).unwrap();
//! assert_eq!(session.scoreboard().moves, 1);
//! assert_eq!(session.queue().len(), 3);
//! ```

mod attestation;
mod game;
mod presentation;

pub use attestation::{Attestation, InMemoryLedger, Offline, PlayerId, ReportReceipt};
pub use game::GameSession;
pub use presentation::{NullPresenter, Presenter};
