use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelegramError {
    /// The request URL embeds the bot token, so it is stripped before the
    /// error is stored.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    #[error("telegram returned http {0}")]
    Status(reqwest::StatusCode),

    #[error("telegram api error {code:?}: {description}")]
    Api {
        code: Option<i64>,
        description: String,
    },

    #[error("malformed telegram response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}
