//! One game from first placement to game over, and every game after it.

use tracing::{debug, info, warn};

use super::attestation::{Attestation, PlayerId};
use super::presentation::Presenter;
use crate::board::Board;
use crate::core::{GameConfig, GameRng, Hex, Token};
use crate::engine::{GameResult, MergeEngine, Phase, Placement, Scoreboard};
use crate::error::{ConfigError, GameError};
use crate::queue::TokenQueue;

/// Orchestrates a board, a queue and the two collaborators.
///
/// Each call to [`start`](Self::start) forks a fresh token stream from the
/// root RNG, so a session seeded with `n` always plays the same series of
/// games.
pub struct GameSession<P, A> {
    config: GameConfig,
    player: PlayerId,
    rng: GameRng,
    engine: MergeEngine,
    queue: TokenQueue,
    result: Option<GameResult>,
    presenter: P,
    attestation: A,
}

impl<P: Presenter, A: Attestation> GameSession<P, A> {
    /// Validate the configuration and start the first game.
    pub fn new(
        config: GameConfig,
        player: PlayerId,
        presenter: P,
        attestation: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let (engine, queue) = Self::fresh_game(&config, &mut rng);

        let mut session = Self {
            config,
            player,
            rng,
            engine,
            queue,
            result: None,
            presenter,
            attestation,
        };
        session.announce_start();
        Ok(session)
    }

    /// Start a new game: empty board, fresh queue, zeroed totals.
    pub fn start(&mut self) {
        let (engine, queue) = Self::fresh_game(&self.config, &mut self.rng);
        self.engine = engine;
        self.queue = queue;
        self.result = None;
        self.announce_start();
    }

    fn fresh_game(config: &GameConfig, rng: &mut GameRng) -> (MergeEngine, TokenQueue) {
        (
            MergeEngine::new(config),
            TokenQueue::initial(config, rng.fork()),
        )
    }

    fn announce_start(&mut self) {
        self.render_all();
        info!(player = %self.player, seed = self.config.seed, "game started");
    }

    /// Discard the current game, whatever its state, and start another.
    pub fn reset(&mut self) {
        debug!(moves = self.engine.scoreboard().moves, "resetting game");
        self.start();
    }

    /// Place the head of the queue at `hex`.
    ///
    /// Rejected selections (game over, occupied or off-board cell) change
    /// nothing and consume no token. When the placement fills the board the
    /// final result is reported to attestation exactly once.
    pub fn select_cell(&mut self, hex: Hex) -> Result<Placement, GameError> {
        self.engine.check_placement(hex)?;

        let token = self.queue.consume()?;
        let placement = self.engine.place(hex, token)?;

        if placement.merged() {
            self.presenter.render_cascade(&placement.steps);
        }
        self.presenter.render_board(self.engine.board());
        self.presenter.render_queue(&self.queue.tokens());
        self.presenter.render_score(&self.engine.scoreboard());

        if placement.game_over {
            self.finish();
        }

        Ok(placement)
    }

    fn finish(&mut self) {
        let result = self.engine.scoreboard().result();
        self.result = Some(result);
        self.presenter.show_game_over(&result);
        info!(player = %self.player, %result, "game over");

        match self.attestation.report_result(&self.player, &result) {
            Ok(receipt) => {
                debug!(reference = %receipt.reference, "result reported");
                self.refresh_best_result();
            }
            Err(err) => warn!(error = %err, "failed to report result"),
        }
    }

    fn refresh_best_result(&mut self) {
        match self.attestation.fetch_best_result(&self.player) {
            Ok(best) => self.presenter.render_best_result(best.as_ref()),
            Err(err) => warn!(error = %err, "failed to fetch best result"),
        }
    }

    fn render_all(&mut self) {
        self.presenter.hide_game_over();
        self.presenter.render_board(self.engine.board());
        self.presenter.render_queue(&self.queue.tokens());
        self.presenter.render_score(&self.engine.scoreboard());
    }

    // === Accessors ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// Upcoming tokens, head first.
    #[must_use]
    pub fn queue(&self) -> Vec<Token> {
        self.queue.tokens()
    }

    /// Running totals.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.engine.scoreboard()
    }

    /// Lifecycle phase of the current game.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    /// Final result, once the current game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Player results are attested for.
    #[must_use]
    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The presentation collaborator.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The attestation collaborator.
    #[must_use]
    pub fn attestation(&self) -> &A {
        &self.attestation
    }
}

impl<P, A> std::fmt::Debug for GameSession<P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("player", &self.player)
            .field("phase", &self.engine.phase())
            .field("scoreboard", &self.engine.scoreboard())
            .field("queue", &self.queue.tokens())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{InMemoryLedger, NullPresenter, Offline};

    fn session(seed: u64) -> GameSession<NullPresenter, InMemoryLedger> {
        GameSession::new(
            GameConfig::default().with_seed(seed),
            PlayerId::new("tester"),
            NullPresenter,
            InMemoryLedger::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_state() {
        let session = session(1);
        assert_eq!(session.board().len(), 37);
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.queue().len(), 3);
        assert_eq!(session.scoreboard(), Scoreboard::default());
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GameSession::new(
            GameConfig::default().with_queue_len(0),
            PlayerId::new("x"),
            NullPresenter,
            Offline,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_select_consumes_head() {
        let mut session = session(2);
        let queue = session.queue();

        let placement = session.select_cell(Hex::ORIGIN).unwrap();
        assert_eq!(placement.token, queue[0]);
        assert_eq!(&session.queue()[..2], &queue[1..]);
        assert_eq!(session.scoreboard().moves, 1);
    }

    #[test]
    fn test_rejected_select_keeps_queue() {
        let mut session = session(3);
        session.select_cell(Hex::ORIGIN).unwrap();
        let queue = session.queue();

        assert_eq!(
            session.select_cell(Hex::ORIGIN),
            Err(GameError::OccupiedCell(Hex::ORIGIN))
        );
        assert_eq!(
            session.select_cell(Hex::new(0, 4)),
            Err(GameError::InvalidCoordinate(Hex::new(0, 4)))
        );
        assert_eq!(session.queue(), queue);
        assert_eq!(session.scoreboard().moves, 1);
    }

    #[test]
    fn test_same_seed_same_queue() {
        assert_eq!(session(9).queue(), session(9).queue());
    }

    #[test]
    fn test_new_and_start_draw_consecutive_forks() {
        let config = GameConfig::default().with_seed(21);
        let mut root = GameRng::new(config.seed);
        let first = TokenQueue::initial(&config, root.fork());
        let second = TokenQueue::initial(&config, root.fork());

        let mut session = session(21);
        assert_eq!(session.queue(), first.tokens());

        session.start();
        assert_eq!(session.queue(), second.tokens());
        assert_eq!(session.scoreboard(), Scoreboard::default());
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_reset_mid_game() {
        let mut session = session(4);
        session.select_cell(Hex::ORIGIN).unwrap();
        session.select_cell(Hex::new(1, 0)).unwrap();

        session.reset();
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.scoreboard(), Scoreboard::default());
        assert_eq!(session.queue().len(), 3);
        assert_eq!(session.phase(), Phase::Active);
    }
}
