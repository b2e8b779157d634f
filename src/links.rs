use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Returns the first `http(s)://` run of non-whitespace characters in `text`.
pub fn find_first_url(text: &str) -> Option<&str> {
    URL_REGEX.find(text).map(|m| m.as_str())
}
