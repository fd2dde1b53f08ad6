//! Axial hex coordinates.
//!
//! ## Layout
//!
//! Cells are addressed by an axial pair `(q, r)`. The implicit third cube
//! coordinate is `s = -q - r`, so the distance of a cell from the origin is
//! `max(|q|, |r|, |q + r|)`.
//!
//! ```
//! use hex_merge::core::{Hex, HexDirection};
//!
//! let origin = Hex::ORIGIN;
//! let east = origin.neighbor(HexDirection::East);
//!
//! assert_eq!(east, Hex::new(1, 0));
//! assert_eq!(east.distance(origin), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Axial coordinate of a hex cell.
///
/// Ordering is by `q`, then `r`. Boards iterate their cells in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hex {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl Hex {
    /// The center cell.
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit third cube coordinate.
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Distance from the origin in hex steps.
    #[must_use]
    pub fn ring_index(self) -> u32 {
        self.q
            .unsigned_abs()
            .max(self.r.unsigned_abs())
            .max(self.s().unsigned_abs())
    }

    /// Distance to another cell in hex steps.
    #[must_use]
    pub fn distance(self, other: Hex) -> u32 {
        Hex::new(self.q - other.q, self.r - other.r).ring_index()
    }

    /// The adjacent coordinate in the given direction.
    ///
    /// The result may lie outside any particular board.
    #[must_use]
    pub fn neighbor(self, direction: HexDirection) -> Hex {
        self + direction.offset()
    }

    /// Whether two coordinates are one step apart.
    #[must_use]
    pub fn is_adjacent(self, other: Hex) -> bool {
        self.distance(other) == 1
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// The six axial unit directions.
///
/// [`HexDirection::ALL`] is the canonical traversal order used for neighbor
/// lookup and flood fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    /// `(1, 0)`
    East,
    /// `(1, -1)`
    NorthEast,
    /// `(0, -1)`
    NorthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, 1)`
    SouthWest,
    /// `(0, 1)`
    SouthEast,
}

impl HexDirection {
    /// All directions in canonical order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::NorthWest,
        HexDirection::West,
        HexDirection::SouthWest,
        HexDirection::SouthEast,
    ];

    /// Unit offset for this direction.
    #[must_use]
    pub const fn offset(self) -> Hex {
        match self {
            HexDirection::East => Hex::new(1, 0),
            HexDirection::NorthEast => Hex::new(1, -1),
            HexDirection::NorthWest => Hex::new(0, -1),
            HexDirection::West => Hex::new(-1, 0),
            HexDirection::SouthWest => Hex::new(-1, 1),
            HexDirection::SouthEast => Hex::new(0, 1),
        }
    }

    /// The direction pointing back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            HexDirection::East => HexDirection::West,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::NorthWest => HexDirection::SouthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::SouthEast => HexDirection::NorthWest,
        }
    }
}
