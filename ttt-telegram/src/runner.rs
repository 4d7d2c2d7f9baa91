//! Dispatcher runner: converts teloxide updates into core game events and
//! hands them to an [`EventHandler`]. Supports long polling and a webhook
//! listener.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, InlineQuery, Message, Update};
use teloxide::update_listeners::webhooks;
use tracing::{debug, error, info, instrument, warn};

use ttt_core::{EventHandler, GameEvent, ToCoreChat, ToCorePlayer};

use crate::adapters::{TelegramChatWrapper, TelegramUserWrapper};

/// Where the dispatcher gets its updates from.
#[derive(Debug, Clone)]
pub enum UpdateMode {
    /// Long polling against the Bot API.
    Polling,
    /// Webhook listener: Telegram pushes updates to `public_url`; the local
    /// server binds `listen_addr`.
    Webhook {
        public_url: reqwest::Url,
        listen_addr: SocketAddr,
    },
}

/// Runs the dispatcher until shutdown.
///
/// Each message, callback query and inline query becomes a [`GameEvent`]
/// which `handler` processes in a spawned task, so a slow store never stalls
/// update delivery. Everything else is ignored at debug level.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler: Arc<dyn EventHandler>,
    mode: UpdateMode,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            info!(username = ?me.user.username, "Bot is now running");
            if !me.supports_inline_queries {
                warn!(
                    "Inline mode is disabled for this bot; enable it via @BotFather or games cannot be shared"
                );
            }
        }
        Err(e) => warn!(error = %e, "get_me failed at startup"),
    }

    let tree = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query))
        .branch(Update::filter_inline_query().endpoint(on_inline_query));

    let mut dispatcher = Dispatcher::builder(bot.clone(), tree)
        .dependencies(dptree::deps![handler])
        .default_handler(|update| async move {
            debug!(update_id = update.id, "Ignoring unsupported update kind");
        })
        .enable_ctrlc_handler()
        .build();

    match mode {
        UpdateMode::Polling => dispatcher.dispatch().await,
        UpdateMode::Webhook {
            public_url,
            listen_addr,
        } => {
            info!(url = %public_url, addr = %listen_addr, "Registering webhook");
            let listener = webhooks::axum(bot, webhooks::Options::new(listen_addr, public_url))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to register webhook: {}", e))?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("Webhook listener error"),
                )
                .await
        }
    }

    Ok(())
}

async fn on_message(msg: Message, handler: Arc<dyn EventHandler>) -> ResponseResult<()> {
    let chat = TelegramChatWrapper(&msg.chat).to_core();
    info!(chat_id = chat.id, chat_type = %chat.chat_type, "Received message");

    dispatch_event(handler, GameEvent::DirectMessage { chat });
    Ok(())
}

async fn on_callback_query(
    query: CallbackQuery,
    handler: Arc<dyn EventHandler>,
) -> ResponseResult<()> {
    let actor = TelegramUserWrapper(&query.from).to_core();
    info!(
        callback_id = %query.id,
        player_id = actor.id,
        data = ?query.data,
        "Received callback query"
    );

    let event = GameEvent::MoveAttempt {
        callback_id: query.id,
        inline_message_id: query.inline_message_id,
        actor,
        token: query.data.unwrap_or_default(),
    };
    dispatch_event(handler, event);
    Ok(())
}

async fn on_inline_query(
    query: InlineQuery,
    handler: Arc<dyn EventHandler>,
) -> ResponseResult<()> {
    let requester = TelegramUserWrapper(&query.from).to_core();
    info!(query_id = %query.id, player_id = requester.id, "Received inline query");

    let event = GameEvent::NewGameRequest {
        query_id: query.id,
        requester,
    };
    dispatch_event(handler, event);
    Ok(())
}

/// Runs the handler in a spawned task so the dispatcher keeps consuming
/// updates; failures are logged and dropped.
fn dispatch_event(handler: Arc<dyn EventHandler>, event: GameEvent) {
    tokio::spawn(async move {
        if let Err(e) = handler.handle(event).await {
            error!(error = %e, "Event handler failed");
        }
    });
}
