//! Wiring: construct the Telegram client, the game store and the event router.

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::Bot;
use tracing::{info, warn};

use ttt_core::Bot as CoreBot;
use ttt_storage::GameRepository;
use ttt_telegram::TelegramBotAdapter;

use crate::config::BotConfig;
use crate::handlers::{GreetingHandler, MoveHandler, NewGameHandler};
use crate::router::EventRouter;

/// Everything the runner needs, built once at startup.
pub struct BotComponents {
    pub store: Arc<GameRepository>,
    pub teloxide_bot: Bot,
    pub bot: Arc<dyn CoreBot>,
}

/// Build the Telegram client and the SQLite-backed game store.
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let mut teloxide_bot = Bot::new(config.bot_token.clone());
    if let Some(ref api_url) = config.telegram_api_url {
        match reqwest::Url::parse(api_url) {
            Ok(url) => {
                info!("Using custom Telegram API server: {}", api_url);
                teloxide_bot = teloxide_bot.set_api_url(url);
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unparseable Telegram API URL: {}", api_url);
            }
        }
    }

    let store = GameRepository::new(&config.database_url)
        .await
        .with_context(|| format!("failed to open game database at {}", config.database_url))?;
    info!("Game store ready at {}", config.database_url);

    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    Ok(BotComponents {
        store: Arc::new(store),
        teloxide_bot,
        bot,
    })
}

/// Assemble the router from its three handlers.
pub fn build_event_router(components: &BotComponents) -> EventRouter {
    let greeting = GreetingHandler::new(components.bot.clone());
    let new_game = NewGameHandler::new(components.store.clone(), components.bot.clone());
    let moves = MoveHandler::new(components.store.clone(), components.bot.clone());
    EventRouter::new(greeting, new_game, moves)
}
