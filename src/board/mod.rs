//! Board representation for Reversi

pub mod bitboard;
pub mod board;


use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, PieceCount};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The 8 compass directions as (row, col) deltas.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One of the two players. Black moves first.
///
/// Encoded as `+1` (Black) and `-1` (White) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Cell state occupied by this side's discs
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }

    #[inline]
    pub fn to_i8(self) -> i8 {
        self.cell().to_i8()
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

impl From<Side> for i8 {
    fn from(side: Side) -> i8 {
        side.to_i8()
    }
}

impl TryFrom<i8> for Side {
    type Error = EngineError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Cell::from_i8(value)?.side().ok_or(EngineError::InvalidCell(value))
    }
}

/// State of a single board cell.
///
/// Encoded as `0` (Empty), `+1` (Black) and `-1` (White).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Side owning this cell, `None` when empty
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    #[inline]
    pub fn to_i8(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }

    pub fn from_i8(value: i8) -> Result<Cell, EngineError> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            -1 => Ok(Cell::White),
            other => Err(EngineError::InvalidCell(other)),
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> i8 {
        cell.to_i8()
    }
}

impl TryFrom<i8> for Cell {
    type Error = EngineError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Cell::from_i8(value)
    }
}

/// Position on the board, also used as the move type.
///
/// [`Pos::new`] does not check bounds; the rule entry points reject
/// positions off the board. Deserialization goes through [`Pos::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPos")]
pub struct Pos {
    row: u8,
    col: u8,
}

/// Unchecked wire form of [`Pos`]
#[derive(Deserialize)]
struct RawPos {
    row: i32,
    col: i32,
}

impl TryFrom<RawPos> for Pos {
    type Error = EngineError;

    fn try_from(raw: RawPos) -> Result<Self, Self::Error> {
        Pos::try_new(raw.row, raw.col)
    }
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// True iff the position lies on the 8x8 board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        Self::is_valid(self.row as i32, self.col as i32)
    }

    /// Build a position from externally supplied coordinates.
    pub fn try_new(row: i32, col: i32) -> Result<Self, EngineError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// True iff both coordinates lie in `[0, 8)`.
    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbor one step along `(dr, dc)`, `None` past the edge.
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if Self::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// True for the four corner cells.
    #[inline]
    pub fn is_corner(self) -> bool {
        let last = BOARD_SIZE as u8 - 1;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
