pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{FETCH_TIMEOUT, HttpFetcher};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
