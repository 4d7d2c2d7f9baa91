//! Bot configuration: Telegram connection, webhook mode, logging, database.
//! Loaded from environment variables; a CLI token overrides `BOT_TOKEN`.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Runtime configuration for the bot binary.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// SQLite database path
    pub database_url: String,
    /// Public webhook URL; `None` means long polling
    pub webhook_url: Option<String>,
    /// Listen address for the webhook server
    pub webhook_addr: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "./tictactoe_bot.db".to_string());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/tictactoe-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let webhook_url = env::var("WEBHOOK_URL").ok();
        let webhook_addr = env::var("WEBHOOK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url,
            webhook_url,
            webhook_addr,
        })
    }

    /// Validate config before anything talks to the network.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref url_str) = self.webhook_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("WEBHOOK_URL is set but not a valid URL: {}", url_str);
            }
            self.webhook_addr.parse::<SocketAddr>().with_context(|| {
                format!(
                    "WEBHOOK_ADDR is not a valid socket address: {}",
                    self.webhook_addr
                )
            })?;
        }
        Ok(())
    }
}
