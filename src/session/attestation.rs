//! Attestation collaborator: records final results and serves a player's best.
//!
//! The session reports once per game, at game over, and never waits on the
//! outcome for anything gameplay related. Implementations backed by a remote
//! service must hand the submission off and return without blocking on
//! confirmation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::GameResult;
use crate::error::AttestationError;

/// Identifier of the player results are attested for (an address, a handle).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Acknowledgement of a submitted result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportReceipt {
    /// Service-specific submission reference.
    pub reference: String,
}

/// Attestation service trait.
pub trait Attestation {
    /// Submit a player's final result.
    fn report_result(
        &mut self,
        player: &PlayerId,
        result: &GameResult,
    ) -> Result<ReportReceipt, AttestationError>;

    /// Fetch a player's best recorded result. `Ok(None)` when nothing is on
    /// record.
    fn fetch_best_result(&self, player: &PlayerId) -> Result<Option<GameResult>, AttestationError>;
}

/// No service connected. Every call fails with `NotConnected`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Offline;

impl Attestation for Offline {
    fn report_result(
        &mut self,
        _player: &PlayerId,
        _result: &GameResult,
    ) -> Result<ReportReceipt, AttestationError> {
        Err(AttestationError::NotConnected)
    }

    fn fetch_best_result(&self, _player: &PlayerId) -> Result<Option<GameResult>, AttestationError> {
        Err(AttestationError::NotConnected)
    }
}

/// Local ledger keeping every player's best result by points.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    best: FxHashMap<PlayerId, GameResult>,
    submissions: u64,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted submissions.
    #[must_use]
    pub fn submissions(&self) -> u64 {
        self.submissions
    }
}

impl Attestation for InMemoryLedger {
    fn report_result(
        &mut self,
        player: &PlayerId,
        result: &GameResult,
    ) -> Result<ReportReceipt, AttestationError> {
        self.submissions += 1;

        let best = self.best.entry(player.clone()).or_insert(*result);
        if result.points > best.points {
            *best = *result;
        }

        Ok(ReportReceipt {
            reference: format!("local-{}", self.submissions),
        })
    }

    fn fetch_best_result(&self, player: &PlayerId) -> Result<Option<GameResult>, AttestationError> {
        Ok(self.best.get(player).copied())
    }
}
