//! Error types shared across the workspace.

use thiserror::Error;

/// A rejected game action.
///
/// Every variant is recoverable per event: the handler answers the player
/// with a notice and the persisted game stays exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("move out of turn")]
    NotYourTurn,
    #[error("game is already over")]
    GameOver,
    #[error("cell coordinates out of range")]
    OutOfBounds,
    #[error("malformed move token: {0:?}")]
    MalformedToken(String),
}

/// A failed session-store operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A compare-and-swap write lost its race; the caller's snapshot is stale.
    #[error("version conflict on game {id}: expected version {expected}")]
    Conflict { id: i64, expected: i64 },
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Top-level error for handlers and the transport layer.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
