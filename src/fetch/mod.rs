//! Asynchronous execution of JSON requests.
//!
//! [`fetch_bytes`] performs one round trip and resolves to the raw payload;
//! [`fetch_json`] feeds that payload through [`crate::decode::decode_slice`].

pub mod auth;
mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use std::collections::HashMap;

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::decode::decode_slice;
use crate::error::{FetchError, Result, snippet};
use crate::request::{Method, build_request};

/// Longest error-body excerpt carried in [`FetchError::RequestUnsuccessful`].
const BODY_SNIPPET_LIMIT: usize = 256;

/// Executes one request and resolves to the raw response payload.
///
/// Exactly one network call is issued per invocation; nothing is retried.
/// A status outside [200, 300) resolves to
/// [`FetchError::RequestUnsuccessful`] carrying the status, and a success
/// status with an empty body to [`FetchError::InvalidData`].
#[tracing::instrument(skip_all, fields(method = %method, url = target))]
pub async fn fetch_bytes<C, P>(
    client: &C,
    target: &str,
    method: Method,
    headers: Option<&HashMap<String, String>>,
    parameters: Option<&P>,
) -> Result<Bytes>
where
    C: HttpClient,
    P: Serialize + ?Sized,
{
    let request = build_request(target, method, headers, parameters)?;
    let response = client.execute(request).await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "request unsuccessful");
        return Err(FetchError::RequestUnsuccessful {
            status,
            body_snippet: snippet(&body, BODY_SNIPPET_LIMIT),
        });
    }

    let bytes = response.bytes().await.map_err(FetchError::InvalidResponse)?;
    if bytes.is_empty() {
        return Err(FetchError::InvalidData);
    }
    debug!(bytes = bytes.len(), "response payload received");
    Ok(bytes)
}

/// Executes one request and decodes the JSON payload into `T`.
///
/// Executor errors propagate unchanged; the decoder only runs on a
/// successful, non-empty payload.
pub async fn fetch_json<T, C, P>(
    client: &C,
    target: &str,
    method: Method,
    headers: Option<&HashMap<String, String>>,
    parameters: Option<&P>,
) -> Result<T>
where
    T: DeserializeOwned,
    C: HttpClient,
    P: Serialize + ?Sized,
{
    let bytes = fetch_bytes(client, target, method, headers, parameters).await?;
    decode_slice(&bytes)
}
