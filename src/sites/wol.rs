use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::content::ExtractedArticle;
use crate::fetcher::HttpFetcher;
use crate::sites::{SiteExtractor, SiteVariant, errors::ExtractError, parser::parse_article};

/// Article body container in the Watchtower Online Library. Both classes
/// must be present.
pub const CONTAINER: &str = "div.scalable.ui-resizable";

/// Extractor for wol.jw.org documents.
#[derive(Debug, Clone)]
pub struct WolExtractor {
    fetcher: HttpFetcher,
}

impl WolExtractor {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl SiteExtractor for WolExtractor {
    fn variant(&self) -> SiteVariant {
        SiteVariant::WolJwOrg
    }

    #[instrument(skip(self), fields(site = "wol.jw.org"))]
    async fn extract(&self, url: &str) -> Result<ExtractedArticle, ExtractError> {
        let page = self.fetcher.fetch(url).await?;
        let article = parse_article(&page.body_utf8, CONTAINER)?;
        debug!(title = %article.title, fragments = article.fragments.len(), "article parsed");
        Ok(article)
    }
}
