//! Request construction: method selection, header merging, body encoding.
//!
//! Everything here is pure with respect to process state. The default
//! header set is produced fresh for every call and merged with the caller's
//! overrides into a new map, so concurrent calls cannot interfere through
//! shared headers.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::error::{FetchError, Result};

/// HTTP verb for a request. Closed set; anything else is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Headers applied to every request unless overridden by the caller.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Merges caller overrides on top of `defaults`; the caller wins on key
/// collision. Returns a fresh map and leaves both inputs untouched.
pub fn merge_headers(
    defaults: HeaderMap,
    overrides: Option<&HashMap<String, String>>,
) -> Result<HeaderMap> {
    let mut merged = defaults;
    let Some(overrides) = overrides else {
        return Ok(merged);
    };
    for (name, value) in overrides {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| FetchError::InvalidHeader { name: name.clone() })?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| FetchError::InvalidHeader { name: name.clone() })?;
        merged.insert(header_name, header_value);
    }
    Ok(merged)
}

/// Builds a ready-to-execute request without touching the network.
///
/// `parameters`, when present, are serialized to JSON and set as the body.
///
/// # Errors
///
/// [`FetchError::InvalidUrl`] if `target` does not parse,
/// [`FetchError::InvalidHeader`] for an illegal override, and
/// [`FetchError::SerializationFailed`] if the parameters reject JSON
/// serialization.
pub fn build_request<P>(
    target: &str,
    method: Method,
    headers: Option<&HashMap<String, String>>,
    parameters: Option<&P>,
) -> Result<reqwest::Request>
where
    P: Serialize + ?Sized,
{
    let url = Url::parse(target).map_err(|source| FetchError::InvalidUrl {
        url: target.to_string(),
        source,
    })?;

    let mut request = reqwest::Request::new(method.into(), url);
    *request.headers_mut() = merge_headers(default_headers(), headers)?;

    if let Some(parameters) = parameters {
        let body = serde_json::to_vec(parameters).map_err(FetchError::SerializationFailed)?;
        *request.body_mut() = Some(body.into());
    }

    Ok(request)
}
