use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("telegraph returned http {0}")]
    Status(reqwest::StatusCode),

    #[error("telegraph rejected the request: {0}")]
    Api(String),

    #[error("malformed telegraph response: {0}")]
    MalformedResponse(String),
}
