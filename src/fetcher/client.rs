use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use reqwest::{
    Client, ClientBuilder,
    header::{self, HeaderMap, HeaderValue},
    redirect,
};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Fixed per-request budget. A timeout is reported as a network error.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const MAX_REDIRECTS: usize = 10;
const USER_AGENT: &str = "Mozilla/5.0 (compatible; Link2InstantViewBot/0.1)";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

/// HTML page fetcher shared by every site extractor.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("pt-BR,pt;q=0.9"),
        );

        let client = ClientBuilder::new()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// GET `url` and decode the HTML body to UTF-8. Any non-2xx status is an
    /// error; nothing is retried.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let url = Url::parse(url)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status));
        }

        if let Some(length) = response.content_length()
            && length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(length));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        let final_url = response.url().clone();
        let body = response.bytes().await?;

        // chunked responses carry no Content-Length
        if body.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body.len() as u64));
        }

        debug!(%status, bytes = body.len(), final_url = %final_url, "page downloaded");

        process_response(final_url, status, body, &content_type)
    }
}
