use std::env;

use crate::errors::{AppError, AppResult};

/// Environment-backed settings. Every field is optional at load time; each
/// subcommand asks for the values it needs and gets a `Config` error naming
/// the missing variable. The bot token itself is only validated by the
/// Telegram API at first use.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    nasa_api_key: Option<String>,
    bot_token: Option<String>,
    chat_id: Option<String>,
    spacex_launch_id: Option<String>,
}

impl Settings {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            nasa_api_key: env_var("NASA_API_KEY"),
            bot_token: env_var("TELEGRAM_BOT_TOKEN"),
            chat_id: env_var("TELEGRAM_CHAT_ID"),
            spacex_launch_id: env_var("SPACEX_LAUNCH_ID"),
        }
    }

    pub fn nasa_api_key(&self) -> AppResult<&str> {
        require(&self.nasa_api_key, "NASA_API_KEY")
    }

    pub fn bot_token(&self) -> AppResult<&str> {
        require(&self.bot_token, "TELEGRAM_BOT_TOKEN")
    }

    pub fn chat_id(&self) -> AppResult<&str> {
        require(&self.chat_id, "TELEGRAM_CHAT_ID")
    }

    pub fn spacex_launch_id(&self) -> AppResult<&str> {
        require(&self.spacex_launch_id, "SPACEX_LAUNCH_ID")
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn require<'a>(value: &'a Option<String>, name: &str) -> AppResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| AppError::Config(format!("{} is not set", name)))
}
