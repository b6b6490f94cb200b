use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};

use crate::error::{FetchError, Result};
use crate::fetch::client::HttpClient;

/// An [`HttpClient`] decorator that sets a fixed header on every request.
///
/// `name` is the header field to set (e.g. `"Authorization"` or a
/// provider-specific API-key header) and `value` is written into it
/// verbatim, overriding any header of the same name already on the request.
#[derive(Debug)]
pub struct ApiKey<C> {
    inner: C,
    name: HeaderName,
    value: HeaderValue,
}

impl<C> ApiKey<C> {
    /// Fails with [`FetchError::InvalidHeader`] if `name` or `key` is not a
    /// legal HTTP header.
    pub fn new(inner: C, name: &str, key: &str) -> Result<Self> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            FetchError::InvalidHeader {
                name: name.to_string(),
            }
        })?;
        let value = HeaderValue::from_str(key).map_err(|_| FetchError::InvalidHeader {
            name: name.to_string(),
        })?;
        Ok(Self {
            inner,
            name: header_name,
            value,
        })
    }

    /// `Authorization: Bearer <token>`, the usual shape for OAuth-style APIs.
    pub fn bearer(inner: C, token: &str) -> Result<Self> {
        Self::new(inner, "Authorization", &format!("Bearer {token}"))
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKey<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut().insert(self.name.clone(), self.value.clone());
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::BasicClient;

    #[test]
    fn test_rejects_illegal_header_name() {
        let err = ApiKey::new(BasicClient::new(), "bad name", "v").unwrap_err();
        assert!(matches!(err, FetchError::InvalidHeader { name } if name == "bad name"));
    }

    #[test]
    fn test_rejects_illegal_header_value() {
        let err = ApiKey::new(BasicClient::new(), "X-Api-Key", "line\nbreak").unwrap_err();
        assert!(matches!(err, FetchError::InvalidHeader { .. }));
    }

    #[test]
    fn test_bearer_accepts_plain_token() {
        assert!(ApiKey::bearer(BasicClient::new(), "sesame").is_ok());
    }
}
