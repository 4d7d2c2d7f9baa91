//! # ttt-telegram
//!
//! Telegram transport for the Tic Tac Toe bot: teloxide-to-core adapters,
//! the [`TelegramBotAdapter`] implementing [`ttt_core::Bot`], and the update
//! dispatcher with polling and webhook modes.

pub mod adapters;
pub mod bot_adapter;
pub mod runner;

pub use adapters::{TelegramChatWrapper, TelegramUserWrapper};
pub use bot_adapter::{board_markup, TelegramBotAdapter};
pub use runner::{run_dispatcher, UpdateMode};
