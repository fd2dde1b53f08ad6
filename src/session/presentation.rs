//! Presentation collaborator.
//!
//! The session calls into a `Presenter` after each engine call has returned.
//! The engine itself never renders.

use crate::board::Board;
use crate::core::Token;
use crate::engine::{GameResult, MergeStep, Scoreboard};

/// Presentation layer trait.
///
/// ## Implementation Notes
///
/// - `render_board` always receives the settled board after a full cascade.
/// - `render_cascade` receives every intermediate snapshot first, so an
///   animated front end can pace merges without the engine knowing.
/// - None of these methods can fail or alter gameplay.
pub trait Presenter {
    /// Draw the whole board.
    fn render_board(&mut self, board: &Board);

    /// Draw the upcoming tokens, head first.
    fn render_queue(&mut self, tokens: &[Token]);

    /// Draw the running totals.
    fn render_score(&mut self, scoreboard: &Scoreboard);

    /// Show the game-over overlay.
    fn show_game_over(&mut self, result: &GameResult);

    /// Hide the game-over overlay.
    fn hide_game_over(&mut self);

    // === Provided Hooks ===

    /// Replay the merge steps of one placement.
    fn render_cascade(&mut self, _steps: &[MergeStep]) {}

    /// Show the player's best attested result, if one exists.
    fn render_best_result(&mut self, _best: Option<&GameResult>) {}
}

/// Presenter that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_board(&mut self, _board: &Board) {}

    fn render_queue(&mut self, _tokens: &[Token]) {}

    fn render_score(&mut self, _scoreboard: &Scoreboard) {}

    fn show_game_over(&mut self, _result: &GameResult) {}

    fn hide_game_over(&mut self) {}
}
