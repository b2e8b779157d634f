use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use reqwest::StatusCode;
use url::Url;

/// Encoding a page body was decoded from.
///
/// jw.org serves UTF-8. Windows-1252 gets its own variant because every
/// `iso-8859-1`/`latin1` label resolves to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Windows1252,
    Other(&'static Encoding),
}

impl Charset {
    pub fn from_encoding(encoding: &'static Encoding) -> Self {
        if encoding == UTF_8 {
            Self::Utf8
        } else if encoding == WINDOWS_1252 {
            Self::Windows1252
        } else {
            Self::Other(encoding)
        }
    }

    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::Windows1252 => WINDOWS_1252,
            Self::Other(encoding) => encoding,
        }
    }
}

/// A fetched HTML page, already decoded.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
    pub charset: Charset,
}
