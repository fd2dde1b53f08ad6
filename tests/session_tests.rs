//! Game session integration tests.
//!
//! These tests verify the session's orchestration: queue handling, the
//! game-over transition, exactly-once attestation and resets.

use hex_merge::board::Board;
use hex_merge::core::{GameConfig, Hex, Token};
use hex_merge::engine::{GameResult, MergeStep, Phase, Scoreboard};
use hex_merge::error::{AttestationError, GameError};
use hex_merge::session::{
    Attestation, GameSession, InMemoryLedger, Offline, PlayerId, Presenter, ReportReceipt,
};

// =============================================================================
// Test Collaborators
// =============================================================================

/// Presenter that counts what it was asked to draw.
#[derive(Debug, Default)]
struct RecordingPresenter {
    boards: usize,
    queues: Vec<usize>,
    scores: Vec<u64>,
    cascades: usize,
    game_overs: Vec<GameResult>,
    hides: usize,
    best: Vec<Option<GameResult>>,
}

impl Presenter for RecordingPresenter {
    fn render_board(&mut self, _board: &Board) {
        self.boards += 1;
    }

    fn render_queue(&mut self, tokens: &[Token]) {
        self.queues.push(tokens.len());
    }

    fn render_score(&mut self, scoreboard: &Scoreboard) {
        self.scores.push(scoreboard.score);
    }

    fn show_game_over(&mut self, result: &GameResult) {
        self.game_overs.push(*result);
    }

    fn hide_game_over(&mut self) {
        self.hides += 1;
    }

    fn render_cascade(&mut self, _steps: &[MergeStep]) {
        self.cascades += 1;
    }

    fn render_best_result(&mut self, best: Option<&GameResult>) {
        self.best.push(best.copied());
    }
}

/// Attestation that accepts nothing and counts attempts.
#[derive(Debug, Default)]
struct FailingAttestation {
    attempts: usize,
}

impl Attestation for FailingAttestation {
    fn report_result(
        &mut self,
        _player: &PlayerId,
        _result: &GameResult,
    ) -> Result<ReportReceipt, AttestationError> {
        self.attempts += 1;
        Err(AttestationError::Unavailable("network down".to_string()))
    }

    fn fetch_best_result(&self, _player: &PlayerId) -> Result<Option<GameResult>, AttestationError> {
        Err(AttestationError::Unavailable("network down".to_string()))
    }
}

/// Radius-1 board where nothing can ever merge: exactly seven moves per game.
fn no_merge_config() -> GameConfig {
    GameConfig::default()
        .with_board_radius(1)
        .with_merge_threshold(100)
        .with_seed(11)
}

fn first_empty(board: &Board) -> Option<Hex> {
    board.empty_cells().next()
}

fn play_out<P: Presenter, A: Attestation>(session: &mut GameSession<P, A>) -> usize {
    let mut placements = 0;
    while session.phase() == Phase::Active {
        let hex = first_empty(session.board()).expect("active game has an empty cell");
        session.select_cell(hex).unwrap();
        placements += 1;
        assert!(placements < 10_000, "game did not terminate");
    }
    placements
}

// =============================================================================
// Game Over and Attestation
// =============================================================================

/// Filling the board reports the final triple exactly once.
#[test]
fn test_game_over_reports_once() {
    let mut session = GameSession::new(
        no_merge_config(),
        PlayerId::new("alice"),
        RecordingPresenter::default(),
        InMemoryLedger::new(),
    )
    .unwrap();

    let placements = play_out(&mut session);

    assert_eq!(placements, 7);
    assert_eq!(session.phase(), Phase::GameOver);

    let expected = GameResult {
        points: 0,
        moves: 7,
        level: 1,
    };
    assert_eq!(session.result(), Some(expected));
    assert_eq!(session.attestation().submissions(), 1);
    assert_eq!(
        session.attestation().fetch_best_result(&PlayerId::new("alice")),
        Ok(Some(expected))
    );
    assert_eq!(session.presenter().game_overs, vec![expected]);
    assert_eq!(session.presenter().best, vec![Some(expected)]);
}

/// Selections after game over are rejected without side effects.
#[test]
fn test_select_after_game_over_is_noop() {
    let mut session = GameSession::new(
        no_merge_config(),
        PlayerId::new("bob"),
        RecordingPresenter::default(),
        InMemoryLedger::new(),
    )
    .unwrap();
    play_out(&mut session);

    let queue = session.queue();
    let renders = session.presenter().boards;

    assert_eq!(session.select_cell(Hex::ORIGIN), Err(GameError::GameOver));
    assert_eq!(session.select_cell(Hex::new(5, 5)), Err(GameError::GameOver));

    assert_eq!(session.queue(), queue);
    assert_eq!(session.presenter().boards, renders);
    assert_eq!(session.attestation().submissions(), 1);
    assert_eq!(session.scoreboard().moves, 7);
}

/// A failed report leaves the session over, with its result intact.
#[test]
fn test_failed_report_does_not_affect_gameplay() {
    let mut session = GameSession::new(
        no_merge_config(),
        PlayerId::new("carol"),
        RecordingPresenter::default(),
        FailingAttestation::default(),
    )
    .unwrap();

    play_out(&mut session);

    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.result().map(|r| r.moves), Some(7));
    assert_eq!(session.attestation().attempts, 1);
    assert!(session.presenter().best.is_empty());
    assert_eq!(session.presenter().game_overs.len(), 1);
}

/// With no service connected the game still plays to completion.
#[test]
fn test_offline_session() {
    let mut session = GameSession::new(
        no_merge_config(),
        PlayerId::new("dave"),
        RecordingPresenter::default(),
        Offline,
    )
    .unwrap();

    play_out(&mut session);
    assert_eq!(session.phase(), Phase::GameOver);
}

// =============================================================================
// Reset
// =============================================================================

/// Reset after game over restores a fresh game.
#[test]
fn test_reset_after_game_over() {
    let mut session = GameSession::new(
        no_merge_config(),
        PlayerId::new("erin"),
        RecordingPresenter::default(),
        InMemoryLedger::new(),
    )
    .unwrap();
    play_out(&mut session);
    let hides_before = session.presenter().hides;

    session.reset();

    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.result(), None);
    assert_eq!(session.scoreboard().score, 0);
    assert_eq!(session.scoreboard().moves, 0);
    assert_eq!(session.scoreboard().max_level, 1);
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(session.queue().len(), 3);
    assert_eq!(session.presenter().hides, hides_before + 1);

    // A second game reports again
    play_out(&mut session);
    assert_eq!(session.attestation().submissions(), 2);
}

/// Two sessions with the same seed play the same series of games.
#[test]
fn test_reset_series_is_reproducible() {
    let config = GameConfig::default().with_seed(5);
    let mut a = GameSession::new(config.clone(), PlayerId::new("a"), RecordingPresenter::default(), Offline).unwrap();
    let mut b = GameSession::new(config, PlayerId::new("b"), RecordingPresenter::default(), Offline).unwrap();

    for _ in 0..3 {
        assert_eq!(a.queue(), b.queue());
        play_out(&mut a);
        play_out(&mut b);
        assert_eq!(a.scoreboard(), b.scoreboard());
        assert_eq!(a.board(), b.board());
        a.reset();
        b.reset();
    }
}

// =============================================================================
// Full Games
// =============================================================================

/// The queue holds three tokens before and after every selection.
#[test]
fn test_queue_length_invariant() {
    let mut session = GameSession::new(
        GameConfig::default().with_seed(77),
        PlayerId::new("frank"),
        RecordingPresenter::default(),
        InMemoryLedger::new(),
    )
    .unwrap();

    while session.phase() == Phase::Active {
        assert_eq!(session.queue().len(), 3);
        let hex = first_empty(session.board()).unwrap();
        session.select_cell(hex).unwrap();
        assert_eq!(session.queue().len(), 3);
    }

    assert!(session.presenter().queues.iter().all(|&len| len == 3));
}

/// Score and moves never decrease, and each merge is replayed to the presenter.
#[test]
fn test_full_game_monotonic() {
    let mut session = GameSession::new(
        GameConfig::default().with_seed(2024),
        PlayerId::new("grace"),
        RecordingPresenter::default(),
        InMemoryLedger::new(),
    )
    .unwrap();

    let mut last = session.scoreboard();
    let mut merged_placements = 0;

    while session.phase() == Phase::Active {
        let hex = first_empty(session.board()).unwrap();
        let placement = session.select_cell(hex).unwrap();
        if placement.merged() {
            merged_placements += 1;
        }

        let now = session.scoreboard();
        assert!(now.score >= last.score);
        assert_eq!(now.moves, last.moves + 1);
        assert!(now.max_level >= last.max_level);
        assert_eq!(now.score - last.score, placement.score_delta);
        last = now;
    }

    assert!(session.board().is_full());
    assert_eq!(session.presenter().cascades, merged_placements);
    assert!(session.presenter().scores.windows(2).all(|w| w[0] <= w[1]));
}
