use thiserror::Error;

use crate::fetcher::FetchError;

/// Why a supported page could not be turned into an article. Every variant
/// ends in the same generic reply; the distinction is for logs and tests.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("network error: {0}")]
    Network(FetchError),

    #[error("page has no <h1> title")]
    MissingTitle,

    #[error("content container `{0}` not found")]
    MissingContainer(String),

    #[error("content container has no paragraphs or sub-headings")]
    EmptyContent,

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<FetchError> for ExtractError {
    fn from(err: FetchError) -> Self {
        match err {
            // the bytes arrived, they just could not be decoded
            FetchError::Charset(reason) => Self::Parse(reason),
            other => Self::Network(other),
        }
    }
}
