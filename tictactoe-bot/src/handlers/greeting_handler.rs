use std::sync::Arc;

use tracing::{debug, info, instrument};

use ttt_core::{Bot, Chat, Result};

const MSG_GREETING: &str = "Hello! Let's play Tic Tac Toe.";
const BTN_START_GAME: &str = "Start Game";

/// Replies to direct messages with an invitation to start a game.
pub struct GreetingHandler {
    bot: Arc<dyn Bot>,
}

impl GreetingHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    #[instrument(skip(self, chat), fields(chat_id = chat.id))]
    pub async fn handle(&self, chat: &Chat) -> Result<()> {
        if !chat.is_private() {
            debug!("step: GreetingHandler ignoring non-private chat");
            return Ok(());
        }
        info!("step: GreetingHandler sending game invitation");
        self.bot
            .send_new_game_prompt(chat, MSG_GREETING, BTN_START_GAME)
            .await
    }
}
