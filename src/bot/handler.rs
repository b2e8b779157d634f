use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::access::{AccessGate, UserId};
use crate::bot::replies::{GREETING, Outcome};
use crate::links::find_first_url;
use crate::publisher::{PublishRequest, Publisher};
use crate::sites::{SiteRegistry, SiteVariant};
use crate::telegram::Update;

/// One inbound text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    pub sender: UserId,
    pub chat_id: i64,
    pub text: String,
}

impl IncomingRequest {
    pub fn new(sender: UserId, chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            sender,
            chat_id,
            text: text.into(),
        }
    }

    /// Text messages with a known sender; everything else is ignored.
    pub fn from_update(update: &Update) -> Option<Self> {
        let message = update.message.as_ref()?;
        let sender = message.from.as_ref()?;
        let text = message.text.as_ref()?;
        Some(Self::new(sender.id, message.chat.id, text.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Other,
}

impl Command {
    /// `/start`, `/start@SomeBot` and `/start payload` are all `Start`.
    fn parse(text: &str) -> Option<Self> {
        let word = text.strip_prefix('/')?.split_whitespace().next().unwrap_or("");
        let name = word.split('@').next().unwrap_or(word);
        if name == "start" {
            Some(Self::Start)
        } else {
            Some(Self::Other)
        }
    }
}

/// Turns an inbound message into at most one reply.
pub struct MessageHandler {
    gate: AccessGate,
    sites: SiteRegistry,
    publisher: Arc<dyn Publisher>,
}

impl MessageHandler {
    pub fn new(gate: AccessGate, sites: SiteRegistry, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            gate,
            sites,
            publisher,
        }
    }

    /// `None` means stay silent: unknown sender or a command we do not serve.
    pub async fn handle(&self, request: &IncomingRequest) -> Option<String> {
        if !self.gate.is_allowed(request.sender) {
            debug!(sender = %request.sender, "ignoring message from unauthorized sender");
            return None;
        }

        match Command::parse(&request.text) {
            Some(Command::Start) => Some(GREETING.to_string()),
            Some(Command::Other) => None,
            None => Some(self.convert(&request.text).await.message()),
        }
    }

    /// Run the link → article → page pipeline on free text.
    pub async fn convert(&self, text: &str) -> Outcome {
        let Some(url) = find_first_url(text) else {
            return Outcome::NoUrl;
        };

        let variant = SiteVariant::classify(url);
        let Some(extractor) = self.sites.extractor_for(variant) else {
            info!(url, "link is not from a supported site");
            return Outcome::UnsupportedSite;
        };

        let article = match extractor.extract(url).await {
            Ok(article) => article,
            Err(e) => {
                warn!(url, site = %variant, error = %e, "extraction failed");
                return Outcome::ExtractionFailed;
            }
        };

        let request = PublishRequest::new(&article, url);
        match self.publisher.publish(&request).await {
            Ok(page) => {
                info!(url, page = %page.url(), "article published");
                Outcome::Published(page)
            }
            Err(e) => {
                error!(url, error = %e, "failed to create telegraph page");
                Outcome::PublishFailed
            }
        }
    }
}
