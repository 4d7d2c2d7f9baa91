//! # ttt-core
//!
//! Core types and traits for the Tic Tac Toe bot: the board and game state
//! machine, the move-token codec, the [`Bot`] / [`SessionStore`] /
//! [`EventHandler`] seams, the error taxonomy and tracing initialization.
//! Transport-agnostic; used by ttt-telegram, ttt-storage and the binary.

pub mod board;
pub mod bot;
pub mod error;
pub mod game;
pub mod logger;
pub mod store;
pub mod token;
pub mod types;

pub use board::{Board, Cell, Mark, SIZE};
pub use bot::Bot;
pub use error::{BotError, GameError, Result, StoreError};
pub use game::{Game, Outcome, Phase};
pub use logger::init_tracing;
pub use store::{SessionStore, VersionedGame};
pub use token::MoveToken;
pub use types::{
    BoardButton, BoardControls, Chat, EventHandler, GameEvent, Player, ToCoreChat, ToCorePlayer,
};
