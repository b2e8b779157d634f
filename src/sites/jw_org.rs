use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::content::ExtractedArticle;
use crate::fetcher::HttpFetcher;
use crate::sites::{SiteExtractor, SiteVariant, errors::ExtractError, parser::parse_article};

/// Article body container on www.jw.org.
pub const CONTAINER: &str = "div.docClass-106";

/// Extractor for www.jw.org articles.
#[derive(Debug, Clone)]
pub struct JwOrgExtractor {
    fetcher: HttpFetcher,
}

impl JwOrgExtractor {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl SiteExtractor for JwOrgExtractor {
    fn variant(&self) -> SiteVariant {
        SiteVariant::WwwJwOrg
    }

    #[instrument(skip(self), fields(site = "www.jw.org"))]
    async fn extract(&self, url: &str) -> Result<ExtractedArticle, ExtractError> {
        let page = self.fetcher.fetch(url).await?;
        let article = parse_article(&page.body_utf8, CONTAINER)?;
        debug!(title = %article.title, fragments = article.fragments.len(), "article parsed");
        Ok(article)
    }
}
