//! Core types: coordinates, tokens, RNG, configuration.
//!
//! These are the building blocks shared by the board, queue, engine and
//! session layers.

pub mod config;
pub mod hex;
pub mod rng;
pub mod token;

pub use config::{GameConfig, DEFAULT_LEVEL_THRESHOLDS};
pub use hex::{Hex, HexDirection};
pub use rng::{GameRng, GameRngState};
pub use token::{Color, Token};
