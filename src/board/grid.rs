//! Hexagonal board of radius `R`.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Hex, HexDirection, Token};
use crate::error::GameError;

/// A board cell: a coordinate and its token, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell coordinate.
    pub hex: Hex,
    /// Token occupying the cell.
    pub token: Option<Token>,
}

impl Cell {
    /// Whether the cell holds no token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_none()
    }
}

/// Hexagonal board containing every cell within `radius` of the origin.
///
/// Backed by a persistent ordered map, so cloning is O(1). The engine clones
/// the board once per cascade step to hand snapshots to the presentation
/// layer.
///
/// ```
/// use hex_merge::board::Board;
/// use hex_merge::core::Hex;
///
/// let board = Board::generate(3);
/// assert_eq!(board.len(), 37);
///
/// // Corner cells have three neighbors, the center has six
/// assert_eq!(board.neighbors(Hex::new(3, 0)).count(), 3);
/// assert_eq!(board.neighbors(Hex::ORIGIN).count(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    radius: u32,
    cells: OrdMap<Hex, Option<Token>>,
}

impl Board {
    /// Generate an empty board with every cell satisfying
    /// `max(|q|, |r|, |q + r|) <= radius`.
    #[must_use]
    pub fn generate(radius: u32) -> Self {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        let mut cells = OrdMap::new();

        for q in -r..=r {
            let r1 = (-r).max(-q - r);
            let r2 = r.min(-q + r);
            for row in r1..=r2 {
                cells.insert(Hex::new(q, row), None);
            }
        }

        Self { radius, cells }
    }

    /// Board radius.
    #[must_use]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells. Never true for a generated board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the coordinate is on the board.
    #[must_use]
    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Get a cell by coordinate.
    #[must_use]
    pub fn get(&self, hex: Hex) -> Option<Cell> {
        self.cells.get(&hex).map(|&token| Cell { hex, token })
    }

    /// Token at a coordinate. `None` for empty or off-board cells.
    #[must_use]
    pub fn token_at(&self, hex: Hex) -> Option<Token> {
        self.cells.get(&hex).copied().flatten()
    }

    /// Whether the coordinate is on the board and holds a token.
    #[must_use]
    pub fn is_occupied(&self, hex: Hex) -> bool {
        self.token_at(hex).is_some()
    }

    /// On-board neighbor coordinates, in canonical direction order.
    #[must_use]
    pub fn neighbor_coords(&self, hex: Hex) -> SmallVec<[Hex; 6]> {
        HexDirection::ALL
            .into_iter()
            .map(|dir| hex.neighbor(dir))
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// On-board neighbor cells, in canonical direction order.
    pub fn neighbors(&self, hex: Hex) -> impl Iterator<Item = Cell> + '_ {
        HexDirection::ALL
            .into_iter()
            .filter_map(move |dir| self.get(hex.neighbor(dir)))
    }

    /// All cells, ordered by `q` then `r`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(|(&hex, &token)| Cell { hex, token })
    }

    /// Coordinates of all empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = Hex> + '_ {
        self.cells
            .iter()
            .filter(|(_, token)| token.is_none())
            .map(|(&hex, _)| hex)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.len() - self.empty_count()
    }

    /// Whether every cell holds a token.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.values().all(Option::is_some)
    }

    /// Overwrite the token at a coordinate, returning the previous one.
    pub fn set_token(&mut self, hex: Hex, token: Option<Token>) -> Result<Option<Token>, GameError> {
        match self.cells.get_mut(&hex) {
            Some(slot) => Ok(std::mem::replace(slot, token)),
            None => Err(GameError::InvalidCoordinate(hex)),
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        let occupied: Vec<Hex> = self
            .cells
            .iter()
            .filter(|(_, token)| token.is_some())
            .map(|(&hex, _)| hex)
            .collect();
        for hex in occupied {
            self.cells.insert(hex, None);
        }
    }
}
