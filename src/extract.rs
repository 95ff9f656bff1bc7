//! URL extraction from free text and hostname resolution.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Scheme-prefixed or `www.`-prefixed run of non-whitespace.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^\s]+|www\.[^\s]+").expect("Invalid URL pattern regex")
});

/// Returns the first URL-like substring of `text`, if any.
pub fn find_url(text: &str) -> Option<&str> {
    URL_PATTERN.find(text).map(|m| m.as_str())
}

/// Whether `raw` carries its own `http://` or `https://` scheme.
pub fn has_scheme(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}

/// Parses the hostname out of an extracted URL.
///
/// Scheme-less (`www.`) input is parsed behind a synthetic `http://`. Returns
/// `None` for any malformed authority; parser errors are not surfaced.
pub fn hostname(raw: &str) -> Option<String> {
    let parsed = if has_scheme(raw) {
        Url::parse(raw)
    } else {
        Url::parse(&format!("http://{raw}"))
    };

    match parsed {
        Ok(url) => url.host_str().filter(|h| !h.is_empty()).map(String::from),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Malformed URL rejected: {}", _e);
            None
        }
    }
}
