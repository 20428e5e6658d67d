//! Reqwest-backed [`HttpClient`].
//!
//! Owns transport details only: request timeout and turning reqwest failures
//! into an opaque error.  Status codes pass through untouched so the loaders
//! can judge them.

use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, RequestBuilder};
use tokio::runtime::Handle;
use tracing::trace;
use url::Url;

use super::{HttpClient, HttpCompletion, HttpResponse};

/// An [`HttpClient`] that runs each request as a task on a tokio runtime.
///
/// The completion is called from that task, so it must not block for long.
pub struct ReqwestHttpClient {
    client: Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Build a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration, runtime: Handle) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, runtime })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let request = self.client.get(url.clone());
        let url = url.clone();
        self.runtime.spawn(async move {
            let outcome = fetch(request)
                .await
                .with_context(|| format!("GET {url}"));
            completion(outcome);
        });
    }
}

async fn fetch(request: RequestBuilder) -> anyhow::Result<HttpResponse> {
    let response = request.send().await.context("sending request")?;
    let status = response.status().as_u16();
    let body = response.bytes().await.context("reading response body")?;
    trace!(status, bytes = body.len(), "response received");
    Ok(HttpResponse::new(status, body))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
