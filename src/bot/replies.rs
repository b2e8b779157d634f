use crate::publisher::PublishedPage;

pub const GREETING: &str = "Bot de artigos iniciado. Envie um link de um site configurado.";
pub const NO_URL: &str = "Por favor, envie um link válido.";
pub const UNSUPPORTED_SITE: &str = "Desculpe, só consigo processar links dos sites configurados.";
pub const EXTRACTION_FAILED: &str = "Não foi possível processar este link.";
pub const PUBLISH_FAILED: &str = "Não foi possível criar a página no Telegra.ph.";

/// Where a conversion attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoUrl,
    UnsupportedSite,
    ExtractionFailed,
    PublishFailed,
    Published(PublishedPage),
}

impl Outcome {
    /// The text sent back to the operator.
    pub fn message(&self) -> String {
        match self {
            Self::NoUrl => NO_URL.to_string(),
            Self::UnsupportedSite => UNSUPPORTED_SITE.to_string(),
            Self::ExtractionFailed => EXTRACTION_FAILED.to_string(),
            Self::PublishFailed => PUBLISH_FAILED.to_string(),
            Self::Published(page) => page.url(),
        }
    }
}
