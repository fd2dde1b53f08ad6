//! Error types.

use crate::core::Hex;

/// Errors raised by gameplay operations.
///
/// Every variant is detected before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate {0} is not on the board")]
    InvalidCoordinate(Hex),

    #[error("cell {0} is already occupied")]
    OccupiedCell(Hex),

    #[error("game is over")]
    GameOver,

    #[error("token queue is empty")]
    QueueUnderflow,
}

impl GameError {
    /// Whether the error is an ignorable input rejection.
    ///
    /// `QueueUnderflow` means the queue refill invariant was broken and is
    /// never recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::QueueUnderflow)
    }
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors reported by an attestation service.
///
/// These never affect gameplay state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttestationError {
    #[error("attestation service not connected")]
    NotConnected,

    #[error("result rejected: {0}")]
    Rejected(String),

    #[error("attestation service unavailable: {0}")]
    Unavailable(String),
}
