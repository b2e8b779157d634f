use serde::{Deserialize, Serialize};

/// One block pulled out of an article body, holding the element's outer
/// HTML exactly as it appeared in the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentFragment {
    Paragraph(String),
    SubHeading(String),
}

impl ContentFragment {
    pub fn markup(&self) -> &str {
        match self {
            Self::Paragraph(html) | Self::SubHeading(html) => html,
        }
    }
}

/// Title plus body fragments in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub fragments: Vec<ContentFragment>,
}

impl ExtractedArticle {
    pub fn body_markup(&self) -> String {
        render_markup(&self.fragments)
    }
}

/// Concatenates fragment markup in order. Inline content is not touched.
pub fn render_markup(fragments: &[ContentFragment]) -> String {
    fragments.iter().map(ContentFragment::markup).collect()
}
