use reqwest::{Client, ClientBuilder};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::telegram::{
    errors::TelegramError,
    types::{ApiResponse, GetUpdatesPayload, Message, SendMessagePayload, Update, User},
};

/// Extra time on top of the long-poll window before the HTTP client gives up.
const POLL_GRACE: Duration = Duration::from_secs(10);

/// Minimal Telegram Bot API client.
#[derive(Debug, Clone)]
pub struct BotClient {
    http: Client,
    base_url: String,
}

impl BotClient {
    pub fn new(api_url: &str, token: &str, poll_timeout: Duration) -> Result<Self, TelegramError> {
        let http = ClientBuilder::new()
            .timeout(poll_timeout + POLL_GRACE)
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    /// Identity of the bot owning the token.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Long-poll for message updates with id >= `offset`.
    #[instrument(skip(self))]
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, TelegramError> {
        let payload = GetUpdatesPayload {
            offset,
            timeout: timeout.as_secs(),
            allowed_updates: &["message"],
        };
        let updates: Vec<Update> = self.call("getUpdates", &payload).await?;
        debug!(count = updates.len(), "updates received");
        Ok(updates)
    }

    #[instrument(skip(self, text))]
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, TelegramError> {
        self.call("sendMessage", &SendMessagePayload { chat_id, text })
            .await
    }

    async fn call<P, T>(&self, method: &str, payload: &P) -> Result<T, TelegramError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(payload)
            .send()
            .await?;

        // error replies carry a JSON description even on non-2xx statuses
        let status = response.status();
        let body = response.text().await?;
        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(TelegramError::Status(status)),
            Err(e) => return Err(TelegramError::MalformedResponse(e.to_string())),
        };

        match (envelope.ok, envelope.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(TelegramError::MalformedResponse(format!(
                "{method} returned ok without result"
            ))),
            (false, _) => Err(TelegramError::Api {
                code: envelope.error_code,
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}
