//! Game state machine: slot binding, turn order, terminal detection and
//! rendering of the status text and board controls.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, Mark, SIZE};
use crate::error::GameError;
use crate::token::MoveToken;
use crate::types::{BoardButton, BoardControls, Player};

/// How a finished game ended. The winning mark is recorded at the moment the
/// game ends and is never re-derived from the turn counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Won(Mark),
    Tied,
}

/// Lifecycle view of a game, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingOpponent,
    InProgress,
    Won(Mark),
    Tied,
}

/// One Tic Tac Toe game between a host and a guest.
///
/// The host creates the game and owns `❎`; the guest is whoever makes the
/// first move from a different account and owns `⭕`. The turn counter starts
/// at 1 and odd turns belong to the guest, so the guest always opens. Until a
/// guest joins, nobody can move.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    id: i64,
    board: Board,
    host: Player,
    guest: Option<Player>,
    turn: u32,
    outcome: Option<Outcome>,
}

impl Game {
    /// A fresh game hosted by `host` under the allocated `id`.
    pub fn new(host: Player, id: i64) -> Game {
        Game {
            id,
            board: Board::new(),
            host,
            guest: None,
            turn: 1,
            outcome: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn host(&self) -> &Player {
        &self.host
    }

    pub fn guest(&self) -> Option<&Player> {
        self.guest.as_ref()
    }

    /// Current turn number, starting at 1. Only successful non-terminal moves
    /// advance it.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(Outcome::Won(mark)) => Phase::Won(mark),
            Some(Outcome::Tied) => Phase::Tied,
            None if self.guest.is_none() => Phase::AwaitingOpponent,
            None => Phase::InProgress,
        }
    }

    /// Mark owed by the current turn: odd turns are the guest's.
    fn mark_to_move(&self) -> Mark {
        if self.turn % 2 == 1 {
            Mark::Guest
        } else {
            Mark::Host
        }
    }

    /// The player expected to move now. `None` while the guest slot is empty
    /// and once the game is over.
    pub fn player_to_move(&self) -> Option<&Player> {
        if self.outcome.is_some() {
            return None;
        }
        match self.mark_to_move() {
            Mark::Host => Some(&self.host),
            Mark::Guest => self.guest.as_ref(),
        }
    }

    fn player_with_mark(&self, mark: Mark) -> Option<&Player> {
        match mark {
            Mark::Host => Some(&self.host),
            Mark::Guest => self.guest.as_ref(),
        }
    }

    /// Applies a move by `actor` at 0-based `(row, col)`.
    ///
    /// Binds `actor` as guest when the guest slot is still empty and `actor`
    /// is not the host; the host can never occupy both slots. Any rejected
    /// move leaves the game exactly as it was, which is why the coordinates
    /// are bounds-checked before the guest slot can bind.
    pub fn apply_move(&mut self, actor: &Player, row: usize, col: usize) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds);
        }

        if self.guest.is_none() && actor.id != self.host.id {
            info!(game_id = self.id, player_id = actor.id, "Guest joined the game");
            self.guest = Some(actor.clone());
        }

        match self.player_to_move() {
            Some(player) if player.id == actor.id => {}
            _ => return Err(GameError::NotYourTurn),
        }

        let mark = self.mark_to_move();
        self.board.place(row, col, mark)?;

        if self.board.winner() == Some(mark) {
            info!(game_id = self.id, player_id = actor.id, "Game won");
            self.outcome = Some(Outcome::Won(mark));
        } else if self.board.is_full() {
            info!(game_id = self.id, "Game tied");
            self.outcome = Some(Outcome::Tied);
        } else {
            self.turn += 1;
        }

        Ok(())
    }

    /// The headline text of the game message, matching the board under it.
    pub fn status_text(&self) -> String {
        let host = self.host.display_name();
        match self.phase() {
            Phase::AwaitingOpponent => format!(
                "Waiting for the second player to join...\n\n{} is waiting for an opponent.",
                host
            ),
            Phase::InProgress => {
                let current = self
                    .player_to_move()
                    .map(Player::display_name)
                    .unwrap_or_default();
                format!("It's {}'s turn\n\n{} vs {}", current, host, self.guest_name())
            }
            Phase::Won(mark) => {
                let winner = self
                    .player_with_mark(mark)
                    .map(Player::display_name)
                    .unwrap_or_default();
                format!("🎉 {} wins! 🎉\n\n{} vs {}", winner, host, self.guest_name())
            }
            Phase::Tied => format!("It's a tie!\n\n{} vs {}", host, self.guest_name()),
        }
    }

    fn guest_name(&self) -> String {
        self.guest
            .as_ref()
            .map(Player::display_name)
            .unwrap_or_default()
    }

    /// Renders the full 3x3 button grid. Every cell gets a button carrying
    /// its move token, in every phase, so a finished board stays visible.
    pub fn board_controls(&self) -> BoardControls {
        let mut rows = Vec::with_capacity(SIZE);
        for row in 0..SIZE {
            let mut buttons = Vec::with_capacity(SIZE);
            for col in 0..SIZE {
                buttons.push(BoardButton {
                    label: self.board.get(row, col).glyph().to_string(),
                    token: MoveToken::for_cell(self.id, row, col).encode(),
                });
            }
            rows.push(buttons);
        }
        BoardControls { rows }
    }
}
