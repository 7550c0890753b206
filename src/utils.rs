// Helper functions: query-string codec and video-ID parsing

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::resolver::errors::ResolveError;

lazy_static! {
    // Video IDs are 11 characters of URL-safe base64.
    static ref VIDEO_ID_RE: Regex = Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap();
}

/// Failure while parsing a URL-encoded payload. Callers wrap this into
/// their own error kind depending on where the payload came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QsError {
    /// The same key appeared more than once
    DuplicateKey(String),
    /// A key or value was not valid percent-encoded UTF-8
    BadEncoding(String),
}

impl fmt::Display for QsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "duplicate key {:?} in query string", key),
            Self::BadEncoding(raw) => write!(f, "undecodable query-string component {:?}", raw),
        }
    }
}

impl std::error::Error for QsError {}

/// Parse a query string into single-valued pairs.
///
/// Pairs with empty values are skipped. A key appearing twice is an error:
/// silently keeping one of the values would hide malformed input.
pub fn parse_qs_single(query: &str) -> Result<HashMap<String, String>, QsError> {
    let mut pairs = HashMap::new();

    for chunk in query.split('&') {
        let (key, value) = match chunk.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        if value.is_empty() {
            continue;
        }

        let key = decode_component(key)?;
        let value = decode_component(value)?;
        if pairs.insert(key.clone(), value).is_some() {
            return Err(QsError::DuplicateKey(key));
        }
    }

    Ok(pairs)
}

fn decode_component(raw: &str) -> Result<String, QsError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| QsError::BadEncoding(raw.to_string()))
}

/// Parse a video ID, either from the "v" query parameter or the last URL
/// path segment. A bare ID comes back unchanged.
pub fn video_id_from_url(input: &str) -> Result<String, ResolveError> {
    let invalid = || ResolveError::InvalidVideoId {
        input: input.to_string(),
    };

    // Strip any fragment, then split off the query string. This handles
    // scheme-less inputs like "youtu.be/ID#shared" that a strict URL
    // parser would reject.
    let without_fragment = input.split('#').next().unwrap_or(input);
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };

    let from_query = match query {
        Some(query) => parse_qs_single(query).map_err(|_| invalid())?.remove("v"),
        None => None,
    };

    let video_id = match from_query {
        Some(v) => v,
        None => path.rsplit('/').next().unwrap_or(path).to_string(),
    };

    if !VIDEO_ID_RE.is_match(&video_id) {
        return Err(invalid());
    }

    tracing::debug!("parsed video ID {} from {}", video_id, input);
    Ok(video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qs_single() {
        let parsed = parse_qs_single("status=ok&reason=none").unwrap();
        assert_eq!(parsed.get("status").unwrap(), "ok");
        assert_eq!(parsed.get("reason").unwrap(), "none");
    }

    #[test]
    fn test_parse_qs_decodes_values() {
        let parsed = parse_qs_single("url=http%3A%2F%2Fexample.com%2Fv&note=two+words").unwrap();
        assert_eq!(parsed.get("url").unwrap(), "http://example.com/v");
        assert_eq!(parsed.get("note").unwrap(), "two words");
    }

    #[test]
    fn test_parse_qs_skips_blank_values() {
        let parsed = parse_qs_single("a=&b=1&flag").unwrap();
        assert!(!parsed.contains_key("a"));
        assert!(!parsed.contains_key("flag"));
        assert_eq!(parsed.get("b").unwrap(), "1");
    }

    #[test]
    fn test_parse_qs_rejects_duplicates() {
        assert_eq!(
            parse_qs_single("a=1&b=2&a=3").unwrap_err(),
            QsError::DuplicateKey("a".to_string()),
        );
        // A blank repeat is dropped before it can conflict.
        assert!(parse_qs_single("a=1&a=").is_ok());
    }

    #[test]
    fn test_video_id_from_v_parameter() {
        assert_eq!(
            video_id_from_url("http://www.youtube.com/watch?v=gEl6TXrkZnk&feature=pem").unwrap(),
            "gEl6TXrkZnk",
        );
    }

    #[test]
    fn test_video_id_from_path() {
        assert_eq!(
            video_id_from_url("youtu.be/gEl6TXrkZnk?feature=pem&g=q#video").unwrap(),
            "gEl6TXrkZnk",
        );
        assert_eq!(
            video_id_from_url("youtu.be/gEl6TXrkZnk#foo").unwrap(),
            "gEl6TXrkZnk",
        );
    }

    #[test]
    fn test_bare_video_id_passes_through() {
        assert_eq!(video_id_from_url("gEl6TXrkZnk").unwrap(), "gEl6TXrkZnk");
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        for input in ["shortid", "gEl6TXrkZnkk", "http://www.youtube.com/watch?x=1"] {
            let err = video_id_from_url(input).unwrap_err();
            assert!(
                matches!(err, ResolveError::InvalidVideoId { .. }),
                "{:?} should be rejected",
                input
            );
        }
    }
}
