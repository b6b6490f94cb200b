use async_trait::async_trait;

use super::client::HttpClient;

/// Plain `reqwest`-backed client with no request decoration.
#[derive(Debug)]
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }

    /// Wraps a preconfigured `reqwest::Client`.
    ///
    /// Transport settings such as timeouts, TLS policy, and redirect
    /// handling are taken as-is and never interpreted by this crate.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self(client)
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
