use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{info, instrument};

use crate::publisher::{
    PublishRequest, PublishedPage, Publisher,
    errors::PublishError,
    nodes::{Node, html_to_nodes},
};

const PUBLISH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T, PublishError> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(PublishError::MalformedResponse(
                "ok response without result".to_string(),
            )),
            (false, _) => Err(PublishError::Api(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateAccountPayload<'a> {
    short_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct Account {
    short_name: Option<String>,
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreatePagePayload<'a> {
    access_token: &'a str,
    title: &'a str,
    author_name: &'a str,
    author_url: &'a str,
    content: Vec<Node>,
    return_content: bool,
}

#[derive(Debug, Deserialize)]
struct Page {
    path: String,
}

/// Telegraph API client. Holds the account token obtained at startup;
/// safe to share between tasks.
#[derive(Debug, Clone)]
pub struct TelegraphClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl TelegraphClient {
    /// Create a Telegraph account and return a client bound to it.
    #[instrument(skip_all, fields(api_url = %api_url, short_name = %short_name))]
    pub async fn connect(api_url: &str, short_name: &str) -> Result<Self, PublishError> {
        let http = ClientBuilder::new().timeout(PUBLISH_TIMEOUT).build()?;
        let api_url = api_url.trim_end_matches('/').to_string();

        let account: Account = call(
            &http,
            &api_url,
            "createAccount",
            &CreateAccountPayload { short_name },
        )
        .await?;

        let access_token = account.access_token.ok_or_else(|| {
            PublishError::MalformedResponse("createAccount returned no access_token".to_string())
        })?;

        info!(
            account = account.short_name.as_deref().unwrap_or(short_name),
            "telegraph account created"
        );

        Ok(Self {
            http,
            api_url,
            access_token,
        })
    }
}

#[async_trait]
impl Publisher for TelegraphClient {
    #[instrument(skip_all, fields(source = %request.source_url()))]
    async fn publish(&self, request: &PublishRequest) -> Result<PublishedPage, PublishError> {
        let payload = CreatePagePayload {
            access_token: &self.access_token,
            title: request.title(),
            author_name: request.attribution_label(),
            author_url: request.source_url(),
            content: html_to_nodes(request.body_markup()),
            return_content: false,
        };

        let page: Page = call(&self.http, &self.api_url, "createPage", &payload).await?;
        info!(path = %page.path, "telegraph page created");

        Ok(PublishedPage::new(page.path))
    }
}

async fn call<P, T>(http: &Client, api_url: &str, method: &str, payload: &P) -> Result<T, PublishError>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = http
        .post(format!("{api_url}/{method}"))
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(PublishError::Status(status));
    }

    let body = response.text().await?;
    let envelope: ApiResponse<T> = serde_json::from_str(&body)
        .map_err(|e| PublishError::MalformedResponse(e.to_string()))?;

    envelope.into_result()
}
