//! Move-token codec for callback button payloads.
//!
//! The wire format is `"<game_id>_<row>_<col>"` with 1-based coordinates,
//! e.g. `"42_1_3"` for the top-right cell of game 42. Tokens stay well under
//! Telegram's 64-byte callback data limit.

use crate::board::SIZE;
use crate::error::GameError;

/// A decoded move: which game and which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToken {
    game_id: i64,
    row: u8,
    col: u8,
}

impl MoveToken {
    /// Token for the cell at 0-based `(row_index, col_index)`.
    pub fn for_cell(game_id: i64, row_index: usize, col_index: usize) -> MoveToken {
        debug_assert!(row_index < SIZE && col_index < SIZE);
        MoveToken {
            game_id,
            row: row_index as u8 + 1,
            col: col_index as u8 + 1,
        }
    }

    pub fn game_id(&self) -> i64 {
        self.game_id
    }

    /// 0-based row.
    pub fn row_index(&self) -> usize {
        self.row as usize - 1
    }

    /// 0-based column.
    pub fn col_index(&self) -> usize {
        self.col as usize - 1
    }

    pub fn encode(&self) -> String {
        format!("{}_{}_{}", self.game_id, self.row, self.col)
    }

    /// Parses callback data. Any deviation from the wire format, wrong part
    /// count, non-numeric or negative id, out-of-range coordinate, is
    /// [`GameError::MalformedToken`]; arbitrary input never panics.
    pub fn decode(data: &str) -> Result<MoveToken, GameError> {
        let malformed = || GameError::MalformedToken(data.to_string());

        let mut parts = data.split('_');
        let (game_id, row, col) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(row), Some(col), None) => (id, row, col),
            _ => return Err(malformed()),
        };

        let game_id: i64 = game_id.parse().map_err(|_| malformed())?;
        let row: u8 = row.parse().map_err(|_| malformed())?;
        let col: u8 = col.parse().map_err(|_| malformed())?;

        if game_id < 0 || !(1..=SIZE as u8).contains(&row) || !(1..=SIZE as u8).contains(&col) {
            return Err(malformed());
        }

        Ok(MoveToken { game_id, row, col })
    }
}
