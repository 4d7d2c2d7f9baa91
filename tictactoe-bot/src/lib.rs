//! Telegram Tic Tac Toe bot: configuration, component wiring, event handlers
//! and the startup runner. The board logic lives in `ttt-core`, persistence in
//! `ttt-storage` and the Telegram transport in `ttt-telegram`.

pub mod components;
pub mod config;
pub mod handlers;
pub mod router;
pub mod runner;

pub use components::{build_bot_components, build_event_router, BotComponents};
pub use config::BotConfig;
pub use router::EventRouter;
pub use runner::run_bot;
