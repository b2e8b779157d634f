use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::content::{ContentFragment, ExtractedArticle};
use crate::sites::errors::ExtractError;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());

static FRAGMENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, h2").unwrap());

pub fn compile_selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Parse(format!("invalid selector `{css}`: {e}")))
}

/// Pulls the title from the first `h1` and every `p`/`h2` under the first
/// element matching `container`, keeping each element's outer HTML.
pub fn parse_article(html: &str, container_css: &str) -> Result<ExtractedArticle, ExtractError> {
    let container_selector = compile_selector(container_css)?;
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(stripped_text)
        .filter(|title| !title.is_empty())
        .ok_or(ExtractError::MissingTitle)?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| ExtractError::MissingContainer(container_css.to_string()))?;

    let fragments: Vec<ContentFragment> = container
        .select(&FRAGMENT_SELECTOR)
        .map(|el| match el.value().name() {
            "h2" => ContentFragment::SubHeading(el.html()),
            _ => ContentFragment::Paragraph(el.html()),
        })
        .collect();

    if fragments.is_empty() {
        return Err(ExtractError::EmptyContent);
    }

    Ok(ExtractedArticle { title, fragments })
}

/// Each text run trimmed, empty runs dropped, the rest joined without a
/// separator.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect()
}
