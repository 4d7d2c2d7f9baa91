use async_trait::async_trait;
use tracing::debug;

use ttt_core::{EventHandler, GameEvent, Result};

use crate::handlers::{GreetingHandler, MoveHandler, NewGameHandler};

/// Fans inbound events out to the matching handler.
///
/// Events originating from other bot accounts are dropped here so no handler
/// has to repeat the check.
pub struct EventRouter {
    greeting: GreetingHandler,
    new_game: NewGameHandler,
    moves: MoveHandler,
}

impl EventRouter {
    pub fn new(greeting: GreetingHandler, new_game: NewGameHandler, moves: MoveHandler) -> Self {
        Self {
            greeting,
            new_game,
            moves,
        }
    }
}

#[async_trait]
impl EventHandler for EventRouter {
    async fn handle(&self, event: GameEvent) -> Result<()> {
        match event {
            GameEvent::NewGameRequest {
                query_id,
                requester,
            } => {
                if requester.is_bot {
                    debug!(
                        "step: routing dropped inline query from bot account {}",
                        requester.id
                    );
                    return Ok(());
                }
                debug!("step: routing inline query {} to NewGameHandler", query_id);
                self.new_game.handle(&query_id, &requester).await
            }
            GameEvent::MoveAttempt {
                callback_id,
                inline_message_id,
                actor,
                token,
            } => {
                if actor.is_bot {
                    debug!(
                        "step: routing dropped callback from bot account {}",
                        actor.id
                    );
                    return Ok(());
                }
                debug!("step: routing callback {} to MoveHandler", callback_id);
                self.moves
                    .handle(&callback_id, inline_message_id.as_deref(), &actor, &token)
                    .await
            }
            GameEvent::DirectMessage { chat } => {
                debug!("step: routing message in chat {} to GreetingHandler", chat.id);
                self.greeting.handle(&chat).await
            }
        }
    }
}
