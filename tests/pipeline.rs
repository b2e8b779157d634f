mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use link2view::access::{AccessGate, UserId};
use link2view::bot::{IncomingRequest, MessageHandler, replies};
use link2view::content::ExtractedArticle;
use link2view::fetcher::HttpFetcher;
use link2view::publisher::TelegraphClient;
use link2view::sites::{ExtractError, JwOrgExtractor, SiteExtractor, SiteRegistry, SiteVariant};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const OPERATOR: UserId = UserId(1001);

/// Real www.jw.org extractor whose requests are sent to a local server,
/// keeping the original path.
struct Rehosted {
    inner: JwOrgExtractor,
    origin: Url,
}

#[async_trait]
impl SiteExtractor for Rehosted {
    fn variant(&self) -> SiteVariant {
        self.inner.variant()
    }

    async fn extract(&self, url: &str) -> Result<ExtractedArticle, ExtractError> {
        let original = Url::parse(url).unwrap();
        let local = self.origin.join(original.path()).unwrap();
        self.inner.extract(local.as_str()).await
    }
}

async fn handler(site: &MockServer, telegraph: &MockServer) -> MessageHandler {
    helpers::mount_create_account(telegraph).await;
    let publisher = TelegraphClient::connect(&telegraph.uri(), "Link2InstantViewBot")
        .await
        .unwrap();

    let mut sites = SiteRegistry::empty();
    sites.register(Box::new(Rehosted {
        inner: JwOrgExtractor::new(HttpFetcher::new().unwrap()),
        origin: Url::parse(&site.uri()).unwrap(),
    }));

    MessageHandler::new(AccessGate::new(OPERATOR), sites, Arc::new(publisher))
}

async fn create_page_calls(telegraph: &MockServer) -> usize {
    telegraph
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/createPage")
        .count()
}

#[tokio::test]
async fn test_link_becomes_telegraph_page() {
    let site = MockServer::start().await;
    let telegraph = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pt/biblioteca/artigo/"))
        .respond_with(helpers::html_response(helpers::www_jw_org_page(
            "T",
            "<p>Um</p><h2>Dois</h2>",
        )))
        .expect(1)
        .mount(&site)
        .await;

    Mock::given(method("POST"))
        .and(path("/createPage"))
        .respond_with(helpers::page_created("abc123"))
        .expect(1)
        .mount(&telegraph)
        .await;

    let handler = handler(&site, &telegraph).await;
    let reply = handler
        .handle(&IncomingRequest::new(
            OPERATOR,
            1001,
            "Veja https://www.jw.org/pt/biblioteca/artigo/ obrigado",
        ))
        .await;

    assert_eq!(reply.as_deref(), Some("https://telegra.ph/abc123"));

    let body = helpers::request_body(&telegraph, "/createPage", 0)
        .await
        .unwrap();
    assert_eq!(body["title"], "T");
    assert_eq!(body["author_name"], "JW.ORG");
    assert_eq!(
        body["author_url"],
        "https://www.jw.org/pt/biblioteca/artigo/"
    );
}

#[tokio::test]
async fn test_missing_container_replies_generic_failure() {
    let site = MockServer::start().await;
    let telegraph = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pt/video/"))
        .respond_with(helpers::html_response(
            "<html><body><h1>Vídeo</h1><div class=\"player\"><p>x</p></div></body></html>"
                .to_string(),
        ))
        .mount(&site)
        .await;

    let handler = handler(&site, &telegraph).await;
    let reply = handler
        .handle(&IncomingRequest::new(
            OPERATOR,
            1001,
            "https://www.jw.org/pt/video/",
        ))
        .await;

    assert_eq!(reply.as_deref(), Some(replies::EXTRACTION_FAILED));
    assert_eq!(create_page_calls(&telegraph).await, 0);
}

#[tokio::test]
async fn test_source_outage_replies_generic_failure() {
    let site = MockServer::start().await;
    let telegraph = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&site)
        .await;

    let handler = handler(&site, &telegraph).await;
    let reply = handler
        .handle(&IncomingRequest::new(OPERATOR, 1001, "https://www.jw.org/pt/x/"))
        .await;

    assert_eq!(reply.as_deref(), Some(replies::EXTRACTION_FAILED));
    assert_eq!(create_page_calls(&telegraph).await, 0);
}

#[tokio::test]
async fn test_telegraph_failure_replies_publish_failure() {
    let site = MockServer::start().await;
    let telegraph = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(helpers::html_response(helpers::www_jw_org_page(
            "T",
            "<p>Um</p>",
        )))
        .mount(&site)
        .await;

    Mock::given(method("POST"))
        .and(path("/createPage"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&telegraph)
        .await;

    let handler = handler(&site, &telegraph).await;
    let reply = handler
        .handle(&IncomingRequest::new(OPERATOR, 1001, "https://www.jw.org/pt/x/"))
        .await;

    assert_eq!(reply.as_deref(), Some(replies::PUBLISH_FAILED));
}

#[tokio::test]
async fn test_unauthorized_sender_triggers_no_requests() {
    let site = MockServer::start().await;
    let telegraph = MockServer::start().await;

    let handler = handler(&site, &telegraph).await;
    for text in ["/start", "https://www.jw.org/pt/x/"] {
        let reply = handler
            .handle(&IncomingRequest::new(UserId(5), 5, text))
            .await;
        assert_eq!(reply, None);
    }

    assert!(site.received_requests().await.unwrap().is_empty());
    assert_eq!(create_page_calls(&telegraph).await, 0);
}
