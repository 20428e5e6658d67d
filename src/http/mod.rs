//! Transport capability consumed by the feed loaders.
//!
//! Loaders never talk to the network directly.  They hand a URL and a
//! completion to an [`HttpClient`] and react to whatever comes back.  This
//! keeps the loaders testable with an in-memory spy and lets the app pick the
//! real transport ([`ReqwestHttpClient`]) at wiring time.
//!
//! ## For contributors: adding a new transport
//!
//! 1. Create a new file in this directory (e.g. `ureq_client.rs`).
//! 2. Implement [`HttpClient`] for your struct.  Call the completion exactly
//!    once per `get`, from whatever thread or task suits your transport.
//! 3. Report *any* response with a status line as `Ok`, even 4xx/5xx.  Status
//!    checks belong to the loaders, not the transport.

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

use bytes::Bytes;
use url::Url;

/// A response that made it back over the wire, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code, e.g. `200`.
    pub status: u16,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outcome of one fetch.  The error is opaque: callers only need to know the
/// fetch failed.
pub type HttpClientResult = anyhow::Result<HttpResponse>;

/// Callback receiving the single outcome of a fetch.
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Asynchronous "fetch bytes from a URL" capability.
///
/// `get` must return promptly and deliver the outcome later by calling
/// `completion` exactly once.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpCompletion);
}
