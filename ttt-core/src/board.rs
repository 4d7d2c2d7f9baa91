//! The 3x3 board: cells, marks, placement and line detection.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Board side length.
pub const SIZE: usize = 3;

/// Which side a cell belongs to. `Host` is the game creator, `Guest` the
/// opponent who joins by making the first move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mark {
    Host,
    Guest,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::Host => Mark::Guest,
            Mark::Guest => Mark::Host,
        }
    }

    /// Glyph shown on board buttons and in status texts.
    pub fn glyph(self) -> &'static str {
        match self {
            Mark::Host => "❎",
            Mark::Guest => "⭕",
        }
    }
}

/// One board cell. Cells are never cleared once taken; there is no undo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }

    /// Button label for this cell. Empty cells render as a single space so
    /// the keyboard keeps its shape.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Taken(mark) => mark.glyph(),
        }
    }
}

/// The playing field. Coordinates are 0-based `(row, col)`, both in `0..SIZE`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Cell at `(row, col)`. Panics if either coordinate is out of range;
    /// untrusted coordinates go through [`place`](Board::place) or the token
    /// codec, which both validate.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Puts `mark` on an empty cell. Out-of-range coordinates fail closed
    /// with [`GameError::OutOfBounds`] before any indexing happens.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds);
        }
        if !self.cells[row][col].is_empty() {
            return Err(GameError::CellOccupied);
        }
        self.cells[row][col] = Cell::Taken(mark);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// The mark holding a completed row, column or diagonal, if any.
    pub fn winner(&self) -> Option<Mark> {
        for i in 0..SIZE {
            if let Some(mark) = line(self.cells[i][0], self.cells[i][1], self.cells[i][2]) {
                return Some(mark);
            }
            if let Some(mark) = line(self.cells[0][i], self.cells[1][i], self.cells[2][i]) {
                return Some(mark);
            }
        }
        line(self.cells[0][0], self.cells[1][1], self.cells[2][2])
            .or_else(|| line(self.cells[0][2], self.cells[1][1], self.cells[2][0]))
    }
}

/// Three equal taken cells yield their mark; empty cells never form a line.
fn line(a: Cell, b: Cell, c: Cell) -> Option<Mark> {
    match (a.mark(), b.mark(), c.mark()) {
        (Some(x), Some(y), Some(z)) if x == y && y == z => Some(x),
        _ => None,
    }
}
