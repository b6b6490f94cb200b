use async_trait::async_trait;

use crate::fetch::client::HttpClient;

/// An [`HttpClient`] decorator that appends a fixed query parameter to every
/// request URL, for APIs that take their key as e.g. `?api_key=...`.
pub struct UrlParam<C> {
    inner: C,
    name: String,
    value: String,
}

impl<C> UrlParam<C> {
    pub fn new(inner: C, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inner,
            name: name.into(),
            value: value.into(),
        }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for UrlParam<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.url_mut()
            .query_pairs_mut()
            .append_pair(&self.name, &self.value);
        self.inner.execute(req).await
    }
}
