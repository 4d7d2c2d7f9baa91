use std::sync::Arc;

use tracing::{info, instrument, warn};

use ttt_core::{Bot, GameError, MoveToken, Player, Result, SessionStore, StoreError};

// Notices pop up on the tapping player's client. Rule violations get a short
// explanation; anything unrecoverable gets a generic one.
const NOTICE_OCCUPIED: &str = "space occupied";
const NOTICE_NOT_YOUR_TURN: &str = "not your turn!!";
const NOTICE_GAME_OVER: &str = "the game is already over";
const NOTICE_BAD_TOKEN: &str = "invalid move";
const NOTICE_GAME_NOT_FOUND: &str = "game not found";
const NOTICE_TRY_AGAIN: &str = "try again";

fn notice_for(err: &GameError) -> &'static str {
    match err {
        GameError::CellOccupied => NOTICE_OCCUPIED,
        GameError::NotYourTurn => NOTICE_NOT_YOUR_TURN,
        GameError::GameOver => NOTICE_GAME_OVER,
        GameError::OutOfBounds | GameError::MalformedToken(_) => NOTICE_BAD_TOKEN,
    }
}

/// Applies a board button press to the stored game and refreshes the message.
///
/// Every rejected press still answers the callback so the client stops its
/// loading spinner. Persistence uses optimistic concurrency: a stale write
/// turns into a "try again" notice instead of clobbering the other player's
/// move.
pub struct MoveHandler {
    store: Arc<dyn SessionStore>,
    bot: Arc<dyn Bot>,
}

impl MoveHandler {
    pub fn new(store: Arc<dyn SessionStore>, bot: Arc<dyn Bot>) -> Self {
        Self { store, bot }
    }

    #[instrument(skip(self, actor), fields(player_id = actor.id))]
    pub async fn handle(
        &self,
        callback_id: &str,
        inline_message_id: Option<&str>,
        actor: &Player,
        data: &str,
    ) -> Result<()> {
        let token = match MoveToken::decode(data) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "step: MoveHandler rejected callback data {:?}", data);
                return self.bot.answer_callback(callback_id, NOTICE_BAD_TOKEN).await;
            }
        };

        let versioned = match self.store.load(token.game_id()).await? {
            Some(versioned) => versioned,
            None => {
                warn!("step: MoveHandler found no game {}", token.game_id());
                return self
                    .bot
                    .answer_callback(callback_id, NOTICE_GAME_NOT_FOUND)
                    .await;
            }
        };

        let mut game = versioned.game;
        if let Err(e) = game.apply_move(actor, token.row_index(), token.col_index()) {
            info!(
                "step: MoveHandler rejected move by {}: {}",
                actor.display_name(),
                e
            );
            return self.bot.answer_callback(callback_id, notice_for(&e)).await;
        }

        match self.store.store(&game, versioned.version).await {
            Ok(()) => {}
            Err(StoreError::Conflict { id, expected }) => {
                info!(
                    "step: MoveHandler lost the race on game {} at version {}",
                    id, expected
                );
                return self.bot.answer_callback(callback_id, NOTICE_TRY_AGAIN).await;
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            "step: MoveHandler applied move {} by {}",
            token.encode(),
            actor.display_name()
        );
        self.bot.answer_callback(callback_id, "").await?;

        match inline_message_id {
            Some(imid) => {
                self.bot
                    .update_board(imid, &game.status_text(), &game.board_controls())
                    .await
            }
            None => {
                // Old callbacks can arrive without an inline message reference.
                warn!(
                    "step: MoveHandler has no inline message to update for game {}",
                    game.id()
                );
                Ok(())
            }
        }
    }
}
