use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes one HTTP round trip.
///
/// Implementations either wrap the concrete transport ([`super::BasicClient`])
/// or decorate another client with per-request behavior
/// ([`super::auth::ApiKey`], [`super::auth::UrlParam`]).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
