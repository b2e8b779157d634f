use reqwest::StatusCode;
use thiserror::Error;

/// Why a page could not be downloaded and decoded. Everything but
/// `Charset` means the page never arrived intact.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("could not connect: {0}")]
    Connect(String),

    #[error("timed out while connecting")]
    ConnectTimeout,

    #[error("timed out waiting for the page")]
    RequestTimeout,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("source answered http {0}")]
    Http(StatusCode),

    #[error("page too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("not an html page: {0}")]
    UnsupportedContentType(String),

    #[error("could not decode page: {0}")]
    Charset(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// True for timeouts of either kind.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ConnectTimeout | Self::RequestTimeout)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_redirect() {
            Self::TooManyRedirects
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
