//! Core types shared across the bot: players, chats, inbound events and the
//! rendered board controls.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A platform user taking part in (or requesting) a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub is_bot: bool,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Player {
    /// Name shown in status texts: username first, then first name, then the
    /// bare id.
    pub fn display_name(&self) -> String {
        if let Some(username) = &self.username {
            username.clone()
        } else if let Some(first_name) = &self.first_name {
            first_name.clone()
        } else {
            format!("player {}", self.id)
        }
    }
}

/// A conversation the bot can post into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    /// Platform chat kind: "private", "group", "supergroup" or "channel".
    pub chat_type: String,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.chat_type == "private"
    }
}

/// One cell button of the rendered board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardButton {
    /// Mark glyph, or a single space for an empty cell.
    pub label: String,
    /// Encoded move token delivered back when the button is pressed.
    pub token: String,
}

/// The 3x3 button grid shown under a game message, one button per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardControls {
    pub rows: Vec<Vec<BoardButton>>,
}

/// An inbound platform event, already converted from transport types.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Inline query asking for a fresh game to share.
    NewGameRequest { query_id: String, requester: Player },
    /// Button press on a game board. `inline_message_id` is present when the
    /// board lives in an inline message the bot can edit.
    MoveAttempt {
        callback_id: String,
        inline_message_id: Option<String>,
        actor: Player,
        token: String,
    },
    /// Plain message sent to the bot.
    DirectMessage { chat: Chat },
}

/// Processes inbound events. The transport runner feeds every update it
/// understands into one of these; implementations must not let one bad event
/// take down the dispatch loop.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: GameEvent) -> Result<()>;
}

/// Converts a transport-specific user into a core [`Player`].
pub trait ToCorePlayer {
    fn to_core(&self) -> Player;
}

/// Converts a transport-specific chat into a core [`Chat`].
pub trait ToCoreChat {
    fn to_core(&self) -> Chat;
}
