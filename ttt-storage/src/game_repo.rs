//! Game repository: versioned persistence for game sessions.
//!
//! Games are stored as JSON documents in the `games` table together with the
//! version stamp driving compare-and-swap writes; the `counters` table backs
//! the monotonic game id allocator.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

use ttt_core::{Game, SessionStore, StoreError, VersionedGame};

/// SQLite-backed [`SessionStore`]. Cheap to clone; clones share one pool.
#[derive(Clone)]
pub struct GameRepository {
    pool: SqlitePool,
}

impl GameRepository {
    /// Opens the database at `database_path`, creating the file and the
    /// schema when missing.
    pub async fn new(database_path: &str) -> Result<Self, sqlx::Error> {
        info!("Initializing SQLite pool: {}", database_path);

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(database_path);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating database tables if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY,
                state TEXT NOT NULL,
                version INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS counters (
                name TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Database tables created successfully");
        Ok(())
    }
}

fn backend(err: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl SessionStore for GameRepository {
    async fn next_game_id(&self) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO counters (name, value) VALUES ('game_id', 1)
            ON CONFLICT(name) DO UPDATE SET value = value + 1
            RETURNING value
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        Ok(id)
    }

    async fn create(&self, game: &Game) -> Result<(), StoreError> {
        let state = serde_json::to_string(game).map_err(backend)?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO games (id, state, version, created_at, updated_at)
            VALUES (?, ?, 0, ?, ?)
            "#,
        )
        .bind(game.id())
        .bind(&state)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        info!(game_id = game.id(), "Created game");
        Ok(())
    }

    async fn load(&self, id: i64) -> Result<Option<VersionedGame>, StoreError> {
        let row: Option<(String, i64)> =
            sqlx::query_as("SELECT state, version FROM games WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;

        match row {
            Some((state, version)) => {
                let game: Game = serde_json::from_str(&state).map_err(backend)?;
                Ok(Some(VersionedGame { game, version }))
            }
            None => Ok(None),
        }
    }

    async fn store(&self, game: &Game, expected_version: i64) -> Result<(), StoreError> {
        let state = serde_json::to_string(game).map_err(backend)?;

        let result = sqlx::query(
            r#"
            UPDATE games
            SET state = ?, version = version + 1, updated_at = ?
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(&state)
        .bind(Utc::now())
        .bind(game.id())
        .bind(expected_version)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        // Zero affected rows means the version moved under us (or the game
        // was never created); either way the caller's snapshot is stale.
        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict {
                id: game.id(),
                expected: expected_version,
            });
        }

        info!(
            game_id = game.id(),
            version = expected_version + 1,
            "Stored game"
        );
        Ok(())
    }
}
