//! Startup sequence: config, logging, components, then the dispatch loop.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use ttt_core::{init_tracing, EventHandler};
use ttt_telegram::{run_dispatcher, UpdateMode};

use crate::components::{build_bot_components, build_event_router};
use crate::config::BotConfig;

/// Runs the bot until shutdown.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(dir) = Path::new(&config.log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        }
    }
    init_tracing(&config.log_file)?;
    info!("Starting Tic Tac Toe bot");

    let components = build_bot_components(&config).await?;
    let router: Arc<dyn EventHandler> = Arc::new(build_event_router(&components));

    let mode = match config.webhook_url {
        Some(ref url) => {
            let public_url =
                reqwest::Url::parse(url).context("WEBHOOK_URL is not a valid URL")?;
            let listen_addr = config
                .webhook_addr
                .parse()
                .context("WEBHOOK_ADDR is not a valid socket address")?;
            info!(
                "Receiving updates via webhook at {} (listening on {})",
                url, config.webhook_addr
            );
            UpdateMode::Webhook {
                public_url,
                listen_addr,
            }
        }
        None => {
            info!("Receiving updates via long polling");
            UpdateMode::Polling
        }
    };

    run_dispatcher(components.teloxide_bot, router, mode).await
}
