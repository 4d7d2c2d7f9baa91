//! Persistence contract for game sessions.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::game::Game;

/// A stored game plus the version stamp guarding compare-and-swap writes.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedGame {
    pub game: Game,
    pub version: i64,
}

/// Durable storage for games, keyed by game id.
///
/// `store` is a compare-and-swap: it succeeds only while the persisted
/// version still equals `expected_version`, then bumps it by one. A lost race
/// surfaces as [`StoreError::Conflict`] and must leave the row untouched.
/// This is the only serialization the bot relies on; handlers never hold
/// locks across awaits.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Allocates the next game id. Ids start at 1 and never repeat.
    async fn next_game_id(&self) -> Result<i64, StoreError>;

    /// Inserts a new game at version 0.
    async fn create(&self, game: &Game) -> Result<(), StoreError>;

    /// Loads a game; `Ok(None)` when the id was never created.
    async fn load(&self, id: i64) -> Result<Option<VersionedGame>, StoreError>;

    /// Compare-and-swap write of `game` against `expected_version`.
    async fn store(&self, game: &Game, expected_version: i64) -> Result<(), StoreError>;
}
