//! Tokens: the colored, leveled pieces placed on the board.

use serde::{Deserialize, Serialize};

/// Token color. Exactly two exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// First color.
    Red,
    /// Second color.
    Blue,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

/// A colored token with a positive level.
///
/// Tokens merge only with tokens of the same color AND the same level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawToken")]
pub struct Token {
    /// Token color.
    pub color: Color,
    level: u32,
}

impl Token {
    /// Create a new token.
    ///
    /// # Panics
    ///
    /// Panics if `level` is zero.
    #[must_use]
    pub fn new(color: Color, level: u32) -> Self {
        assert!(level >= 1, "Token level must be at least 1");
        Self { color, level }
    }

    /// Shorthand for a red token.
    #[must_use]
    pub fn red(level: u32) -> Self {
        Self::new(Color::Red, level)
    }

    /// Shorthand for a blue token.
    #[must_use]
    pub fn blue(level: u32) -> Self {
        Self::new(Color::Blue, level)
    }

    /// Token level (always >= 1).
    #[must_use]
    pub const fn level(self) -> u32 {
        self.level
    }

    /// Whether two tokens can belong to the same merge group.
    #[must_use]
    pub fn matches(self, other: Token) -> bool {
        self.color == other.color && self.level == other.level
    }

    /// The token produced by merging a group of this token.
    ///
    /// Levels saturate at `u32::MAX`.
    #[must_use]
    pub const fn promoted(self) -> Self {
        Self {
            color: self.color,
            level: self.level.saturating_add(1),
        }
    }
}

/// Unchecked wire form of a [`Token`].
#[derive(Deserialize)]
struct RawToken {
    color: Color,
    level: u32,
}

impl TryFrom<RawToken> for Token {
    type Error = String;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        if raw.level == 0 {
            return Err("token level must be at least 1".to_string());
        }
        Ok(Self {
            color: raw.color,
            level: raw.level,
        })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.color, self.level)
    }
}
