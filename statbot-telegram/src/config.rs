//! Minimal bot configuration loaded from environment variables.
//! BOT_TOKEN is required; Telegram/GitHub API URLs, the GitHub token, and the
//! log file path are optional.

use anyhow::Result;
use std::env;

/// Runtime configuration for the Telegram-fronted bot.
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub github_token: Option<String>,
    pub github_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads config from environment: BOT_TOKEN required; TELEGRAM_API_URL
    /// (or TELOXIDE_API_URL), GITHUB_TOKEN, GITHUB_API_URL, LOG_FILE optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let github_token = env::var("GITHUB_TOKEN").ok();
        let github_api_url = env::var("GITHUB_API_URL").ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            github_token,
            github_api_url,
            log_file,
        })
    }

    /// Config with the given token only; everything else defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            github_token: None,
            github_api_url: None,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.github_token.is_none());
        assert!(config.github_api_url.is_none());
        assert!(config.log_file.is_none());
    }
}
