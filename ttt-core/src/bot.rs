//! Outbound surface towards the chat platform.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BoardControls, Chat};

/// Everything the game needs to say back to the platform.
///
/// The transport crate implements this over the real API; handlers depend on
/// the trait so tests can record calls instead of hitting the network.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends the greeting message carrying the "start a game" inline button.
    async fn send_new_game_prompt(
        &self,
        chat: &Chat,
        text: &str,
        button_label: &str,
    ) -> Result<()>;

    /// Answers an inline query with a single shareable game article.
    async fn answer_new_game(
        &self,
        query_id: &str,
        title: &str,
        status_text: &str,
        controls: &BoardControls,
    ) -> Result<()>;

    /// Answers a callback query. An empty `notice` acks silently; anything
    /// else pops up as a transient notification on the player's client.
    async fn answer_callback(&self, callback_id: &str, notice: &str) -> Result<()>;

    /// Replaces a game message's text and keyboard after a successful move.
    async fn update_board(
        &self,
        inline_message_id: &str,
        status_text: &str,
        controls: &BoardControls,
    ) -> Result<()>;
}
