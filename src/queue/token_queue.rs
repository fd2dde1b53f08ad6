//! Fixed-length lookahead of upcoming tokens.

use std::collections::VecDeque;

use crate::core::{Color, GameConfig, GameRng, Token};
use crate::error::GameError;

/// Draws fresh random tokens.
///
/// Color is uniform over the two colors. Level follows the cumulative
/// thresholds from [`GameConfig::level_thresholds`].
#[derive(Clone, Debug)]
pub struct TokenGenerator {
    rng: GameRng,
    level_thresholds: Vec<f64>,
}

impl TokenGenerator {
    /// Create a generator over an RNG stream.
    #[must_use]
    pub fn new(rng: GameRng, level_thresholds: Vec<f64>) -> Self {
        Self {
            rng,
            level_thresholds,
        }
    }

    /// Draw one token: a color draw, then a level draw.
    pub fn next_token(&mut self) -> Token {
        let color = if self.rng.gen_unit() < 0.5 {
            Color::Red
        } else {
            Color::Blue
        };
        let index = self.rng.pick_cumulative(&self.level_thresholds);
        let level = u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1));
        Token::new(color, level)
    }
}

/// Upcoming tokens, head first.
///
/// Consuming the head immediately appends a fresh token at the tail, so the
/// length never changes over the life of a game.
///
/// ```
/// use hex_merge::core::{GameConfig, GameRng};
/// use hex_merge::queue::TokenQueue;
///
/// let config = GameConfig::default();
/// let mut queue = TokenQueue::initial(&config, GameRng::new(1));
///
/// let head = queue.peek();
/// let consumed = queue.consume().unwrap();
/// assert_eq!(Some(consumed), head);
/// assert_eq!(queue.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
    generator: TokenGenerator,
}

impl TokenQueue {
    /// Fill a queue of `config.queue_len` tokens from the given stream.
    #[must_use]
    pub fn initial(config: &GameConfig, rng: GameRng) -> Self {
        let generator = TokenGenerator::new(rng, config.level_thresholds.clone());
        Self::with_generator(config.queue_len, generator)
    }

    /// Fill a queue of `size` tokens from an existing generator.
    #[must_use]
    pub fn with_generator(size: usize, mut generator: TokenGenerator) -> Self {
        let tokens = (0..size).map(|_| generator.next_token()).collect();
        Self { tokens, generator }
    }

    /// Draw a fresh token without touching the queue.
    pub fn next(&mut self) -> Token {
        self.generator.next_token()
    }

    /// Remove and return the head, refilling the tail.
    pub fn consume(&mut self) -> Result<Token, GameError> {
        let head = self.tokens.pop_front().ok_or(GameError::QueueUnderflow)?;
        let fresh = self.generator.next_token();
        self.tokens.push_back(fresh);
        Ok(head)
    }

    /// The token the next placement will use.
    #[must_use]
    pub fn peek(&self) -> Option<Token> {
        self.tokens.front().copied()
    }

    /// Pending tokens, head first.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens.iter().copied().collect()
    }

    /// Queue length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
