//! github-statbot CLI: run the Telegram bot. Config from env (`.env`
//! supported); the bot token can be overridden on the command line.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use statbot_core::init_tracing;
use statbot_engine::Router;
use statbot_github::GithubClient;
use statbot_telegram::{build_bot, run_repl, TelegramConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "github-statbot")]
#[command(about = "Telegram bot for GitHub user profiles and repositories", long_about = None)]
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
            let mut config = TelegramConfig::from_env().or_else(|e| match &token {
                Some(t) => Ok(TelegramConfig::with_token(t.clone())),
                None => Err(e),
            })?;
            if let Some(t) = token {
                config.bot_token = t;
            }
            run(config).await
        }
    }
}

/// Initializes logging, builds the GitHub client and router, starts the REPL.
async fn run(config: TelegramConfig) -> Result<()> {
    std::fs::create_dir_all("logs")?;
    let log_file = config
        .log_file
        .clone()
        .unwrap_or_else(|| "logs/github-statbot.log".to_string());
    init_tracing(&log_file)?;

    let github = match &config.github_api_url {
        Some(url) => GithubClient::with_base_url(url.clone(), config.github_token.clone())?,
        None => GithubClient::new(config.github_token.clone())?,
    };
    let router = Arc::new(Router::new(Arc::new(github)));

    let bot = build_bot(&config)?;
    info!("Bot started successfully");

    run_repl(bot, router).await
}
