//! Board structure with piece counting

use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::{Cell, Pos, Side, BOARD_SIZE, TOTAL_CELLS};
use crate::error::EngineError;

/// Row-major 8x8 grid of encoded cells (`+1` Black, `-1` White, `0` Empty).
pub type Grid = [[i8; BOARD_SIZE]; BOARD_SIZE];

/// Game board.
///
/// A plain value: copying it is the only way to obtain a speculative position,
/// so search branches never alias each other or the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Grid", try_from = "Grid")]
pub struct Board {
    /// Black discs
    black: Bitboard,
    /// White discs, always disjoint from `black`
    white: Bitboard,
}

/// Disc count per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PieceCount {
    pub black: u32,
    pub white: u32,
}

impl PieceCount {
    #[inline]
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.black + self.white
    }
}

impl Board {
    /// Empty board (no discs at all). Use [`Board::initial`] for a new game.
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Standard opening: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub fn initial() -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        let mut board = Self::new();
        board.place_stone(Pos::new(mid - 1, mid - 1), Side::White);
        board.place_stone(Pos::new(mid, mid), Side::White);
        board.place_stone(Pos::new(mid - 1, mid), Side::Black);
        board.place_stone(Pos::new(mid, mid - 1), Side::Black);
        board
    }

    /// Get cell state at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a disc on a cell without any flipping.
    ///
    /// Meant for setting up positions. Game moves go through
    /// [`apply_move`](crate::rules::apply_move).
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, side: Side) {
        match side {
            Side::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Side::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
        }
    }

    /// Hand every disc in `mask` over to `side`.
    #[inline]
    pub(crate) fn flip_to(&mut self, mask: Bitboard, side: Side) {
        match side {
            Side::Black => {
                self.white = self.white.without(mask);
                self.black = self.black.union(mask);
            }
            Side::White => {
                self.black = self.black.without(mask);
                self.white = self.white.union(mask);
            }
        }
    }

    /// Get bitboard for a side
    #[inline]
    pub fn stones(&self, side: Side) -> &Bitboard {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    /// Occupied cells of either side
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(self.white)
    }

    pub fn count_pieces(&self) -> PieceCount {
        PieceCount {
            black: self.black.count(),
            white: self.white.count(),
        }
    }

    /// Total discs on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.stone_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Row-major encoded grid
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.get(Pos::new(row as u8, col as u8)).to_i8();
            }
        }
        grid
    }

    /// Build a board from an encoded grid, rejecting unknown cell values.
    pub fn from_grid(grid: &Grid) -> Result<Self, EngineError> {
        let mut board = Self::new();
        for (row, cells) in grid.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if let Some(side) = Cell::from_i8(value)?.side() {
                    board.place_stone(Pos::new(row as u8, col as u8), side);
                }
            }
        }
        Ok(board)
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Grid {
        board.to_grid()
    }
}

impl TryFrom<Grid> for Board {
    type Error = EngineError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Board::from_grid(&grid)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
