//! Wikipedia article URL rules
//!
//! A quiz can only be requested for an English Wikipedia article:
//! `https://en.wikipedia.org/wiki/<Article_Name>`. The same rules drive the
//! local title preview and the links built for related topics.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::ValidationError;

/// Host every accepted article URL must point at.
pub const WIKIPEDIA_HOST: &str = "en.wikipedia.org";

/// Prefix shown as input placeholder and used to build topic links.
pub const ARTICLE_URL_PREFIX: &str = "https://en.wikipedia.org/wiki/";

const ARTICLE_PATH_PREFIX: &str = "/wiki/";

/// Characters `encodeURIComponent` leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parse and validate an article URL.
///
/// Accepts only `https` URLs on [`WIKIPEDIA_HOST`] whose path is `/wiki/`
/// followed by a non-empty article name. Surrounding whitespace is ignored.
pub fn validate_article_url(input: &str) -> Result<Url, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let not_article = || ValidationError::NotWikipediaArticle {
        url: trimmed.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|_| not_article())?;
    if url.scheme() != "https" || url.host_str() != Some(WIKIPEDIA_HOST) {
        return Err(not_article());
    }

    match url.path().strip_prefix(ARTICLE_PATH_PREFIX) {
        Some(article) if !article.is_empty() => Ok(url),
        _ => Err(not_article()),
    }
}

/// Whether `input` is an acceptable article URL.
pub fn is_wikipedia_article_url(input: &str) -> bool {
    validate_article_url(input).is_ok()
}

/// Derive a human-readable article title from the URL path.
///
/// `https://en.wikipedia.org/wiki/Ada_Lovelace` → `Ada Lovelace`.
/// Returns `None` for anything that is not an article URL.
pub fn article_title_from_url(input: &str) -> Option<String> {
    let url = validate_article_url(input).ok()?;
    let encoded = url.path().strip_prefix(ARTICLE_PATH_PREFIX)?;
    let decoded = percent_decode_str(encoded).decode_utf8_lossy();
    Some(decoded.replace('_', " "))
}

/// Link to the Wikipedia article for a related topic name.
pub fn related_topic_url(topic: &str) -> String {
    format!(
        "{}{}",
        ARTICLE_URL_PREFIX,
        utf8_percent_encode(topic, COMPONENT)
    )
}
