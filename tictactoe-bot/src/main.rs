//! Tic Tac Toe bot CLI. Config comes from env and an optional token argument.

use anyhow::Result;
use clap::{Parser, Subcommand};

use tictactoe_bot::{run_bot, BotConfig};

#[derive(Parser)]
#[command(name = "tictactoe-bot")]
#[command(about = "Telegram Tic Tac Toe bot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
