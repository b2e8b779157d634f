pub mod errors;
pub mod nodes;
pub mod telegraph;

use async_trait::async_trait;

use crate::content::ExtractedArticle;

pub use errors::PublishError;
pub use telegraph::TelegraphClient;

/// Public pages live under this base; the API returns only the path.
pub const TELEGRAPH_BASE_URL: &str = "https://telegra.ph/";

/// Author name shown on every published page.
pub const ATTRIBUTION_LABEL: &str = "JW.ORG";

/// Everything needed to create one hosted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    title: String,
    body_markup: String,
    attribution_label: String,
    source_url: String,
}

impl PublishRequest {
    pub fn new(article: &ExtractedArticle, source_url: impl Into<String>) -> Self {
        Self {
            title: article.title.clone(),
            body_markup: article.body_markup(),
            attribution_label: ATTRIBUTION_LABEL.to_string(),
            source_url: source_url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body_markup(&self) -> &str {
        &self.body_markup
    }

    pub fn attribution_label(&self) -> &str {
        &self.attribution_label
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPage {
    path: String,
}

impl PublishedPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Shareable link for the page.
    pub fn url(&self) -> String {
        format!("{TELEGRAPH_BASE_URL}{}", self.path)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Create one page. Called at most once per request; never retried.
    async fn publish(&self, request: &PublishRequest) -> Result<PublishedPage, PublishError>;
}
