//! Client decorators that attach credentials to every outgoing request.

mod api_key;
mod url_param;

pub use api_key::ApiKey;
pub use url_param::UrlParam;
