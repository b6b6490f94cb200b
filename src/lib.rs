//! Asynchronous helper for fetching JSON over HTTP and decoding it into
//! typed values.
//!
//! One round trip per call: build a request from a URL, method, optional
//! header overrides, and optional JSON parameters; execute it; map the
//! outcome to either the raw payload ([`fetch_bytes`]) or a decoded value
//! ([`fetch_json`]). Transport behavior (timeouts, TLS, redirects) belongs
//! to the wrapped `reqwest::Client` and is never interpreted here.

pub mod decode;
pub mod error;
pub mod fetch;
pub mod request;

pub use decode::decode_slice;
pub use error::{FetchError, Result};
pub use fetch::{BasicClient, HttpClient, fetch_bytes, fetch_json};
pub use request::Method;
