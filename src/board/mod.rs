//! Hex board geometry and occupancy.
//!
//! The board is generated once per game and never changes shape; only the
//! tokens held by its cells change.

mod grid;

pub use grid::{Board, Cell};
