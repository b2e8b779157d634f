//! Configuration handling for the bot.
//!
//! Everything comes from environment variables. The two values the bot
//! cannot run without (the Telegram token and the operator's user id) are
//! required; the service endpoints fall back to the public production hosts
//! so tests can point them at a local mock server.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::access::UserId;

/// Environment variable names.
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_AUTHORIZED_USER_ID: &str = "AUTHORIZED_USER_ID";
pub const ENV_TELEGRAM_API_URL: &str = "TELEGRAM_API_URL";
pub const ENV_TELEGRAPH_API_URL: &str = "TELEGRAPH_API_URL";
pub const ENV_TELEGRAPH_SHORT_NAME: &str = "TELEGRAPH_SHORT_NAME";
pub const ENV_POLL_TIMEOUT_SECS: &str = "POLL_TIMEOUT_SECS";

const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_TELEGRAPH_API_URL: &str = "https://api.telegra.ph";
const DEFAULT_TELEGRAPH_SHORT_NAME: &str = "Link2InstantViewBot";
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;

/// Bot runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bot_token: String,
    authorized_user: UserId,
    telegram_api_url: String,
    telegraph_api_url: String,
    telegraph_short_name: String,
    poll_timeout: Duration,
}

impl Config {
    /// Create a config with the required values and production endpoints.
    pub fn new(bot_token: impl Into<String>, authorized_user: UserId) -> Self {
        Self {
            bot_token: bot_token.into(),
            authorized_user,
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            telegraph_api_url: DEFAULT_TELEGRAPH_API_URL.to_string(),
            telegraph_short_name: DEFAULT_TELEGRAPH_SHORT_NAME.to_string(),
            poll_timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
        }
    }

    /// Load from environment variables.
    ///
    /// Fails when the bot token is missing or empty, or when the authorized
    /// user id is missing, not an integer, or zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = env::var(ENV_TELEGRAM_BOT_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_TELEGRAM_BOT_TOKEN))?;

        let raw_user = env::var(ENV_AUTHORIZED_USER_ID)
            .map_err(|_| ConfigError::Missing(ENV_AUTHORIZED_USER_ID))?;
        let authorized_user = parse_user_id(&raw_user)?;

        let mut config = Self::new(bot_token, authorized_user);

        if let Ok(url) = env::var(ENV_TELEGRAM_API_URL) {
            config.telegram_api_url = url;
        }
        if let Ok(url) = env::var(ENV_TELEGRAPH_API_URL) {
            config.telegraph_api_url = url;
        }
        if let Ok(name) = env::var(ENV_TELEGRAPH_SHORT_NAME) {
            config.telegraph_short_name = name;
        }
        if let Ok(raw) = env::var(ENV_POLL_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field: ENV_POLL_TIMEOUT_SECS,
                reason: e.to_string(),
            })?;
            config.poll_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Point the Telegram client at a different Bot API host.
    pub fn with_telegram_api_url(mut self, url: impl Into<String>) -> Self {
        self.telegram_api_url = url.into();
        self
    }

    /// Point the publisher at a different Telegraph API host.
    pub fn with_telegraph_api_url(mut self, url: impl Into<String>) -> Self {
        self.telegraph_api_url = url.into();
        self
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    /// The single operator allowed to use the bot.
    pub fn authorized_user(&self) -> UserId {
        self.authorized_user
    }

    pub fn telegram_api_url(&self) -> &str {
        &self.telegram_api_url
    }

    pub fn telegraph_api_url(&self) -> &str {
        &self.telegraph_api_url
    }

    /// Account short name registered with Telegraph at startup.
    pub fn telegraph_short_name(&self) -> &str {
        &self.telegraph_short_name
    }

    /// Long-poll window passed to `getUpdates`.
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ConfigError> {
    let id = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidValue {
            field: ENV_AUTHORIZED_USER_ID,
            reason: e.to_string(),
        })?;

    if id == 0 {
        return Err(ConfigError::InvalidValue {
            field: ENV_AUTHORIZED_USER_ID,
            reason: "user id must be non-zero".to_string(),
        });
    }

    Ok(UserId(id))
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
