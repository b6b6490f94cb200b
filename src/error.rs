//! Error taxonomy for request building, execution, and decoding.
//!
//! Every failure is surfaced to the caller as the resolved outcome of the
//! call; nothing is retried or recovered internally.

use thiserror::Error;

/// Errors returned by [`crate::fetch_bytes`], [`crate::fetch_json`], and the
/// pure request/decode helpers they are built from.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The target string is not a valid URL; no request was issued.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header override is not a legal HTTP header name or value.
    #[error("invalid header {name:?}")]
    InvalidHeader { name: String },

    /// The request parameters could not be serialized to JSON.
    #[error("failed to serialize request parameters: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Network-level failure (DNS, connect, timeout), passed through.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Success status, but the response body could not be read off the wire.
    #[error("failed to read response body: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    /// Status outside [200, 300). Carries the status and a body excerpt.
    #[error("HTTP {status}: {body_snippet}")]
    RequestUnsuccessful {
        status: reqwest::StatusCode,
        body_snippet: String,
    },

    /// Success status with an empty payload.
    #[error("success status with empty response body")]
    InvalidData,

    /// The JSON payload does not match the requested shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Truncates a response body for inclusion in an error message.
pub(crate) fn snippet(body: &str, limit: usize) -> String {
    let mut out = String::with_capacity(limit.min(body.len()));
    for (taken, ch) in body.chars().enumerate() {
        if taken == limit {
            out.push_str("...");
            return out;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_short_body_unchanged() {
        assert_eq!(snippet("not found", 256), "not found");
    }

    #[test]
    fn test_snippet_long_body_truncated() {
        let body = "x".repeat(300);
        let out = snippet(&body, 256);
        assert_eq!(out.len(), 259);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_snippet_exact_limit_unchanged() {
        let body = "y".repeat(16);
        assert_eq!(snippet(&body, 16), body);
    }
}
