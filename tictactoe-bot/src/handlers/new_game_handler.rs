use std::sync::Arc;

use tracing::{info, instrument};

use ttt_core::{Bot, Game, Player, Result, SessionStore};

const GAME_TITLE: &str = "Start Tic Tac Toe Game";

/// Creates a fresh game for an inline query and answers with the shareable
/// board article. The requester becomes the host; the opponent joins by
/// pressing any cell.
pub struct NewGameHandler {
    store: Arc<dyn SessionStore>,
    bot: Arc<dyn Bot>,
}

impl NewGameHandler {
    pub fn new(store: Arc<dyn SessionStore>, bot: Arc<dyn Bot>) -> Self {
        Self { store, bot }
    }

    #[instrument(skip(self, requester), fields(player_id = requester.id))]
    pub async fn handle(&self, query_id: &str, requester: &Player) -> Result<()> {
        let id = self.store.next_game_id().await?;
        let game = Game::new(requester.clone(), id);
        self.store.create(&game).await?;
        info!(
            "step: NewGameHandler created game {} for {}",
            id,
            requester.display_name()
        );
        self.bot
            .answer_new_game(
                query_id,
                GAME_TITLE,
                &game.status_text(),
                &game.board_controls(),
            )
            .await
    }
}
