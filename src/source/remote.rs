//! Feed loader backed by an HTTP endpoint.
//!
//! One `load` is one GET of the configured URL.  The transport outcome is
//! turned into a [`LoadResult`]: transport failures become
//! [`LoadError::Connectivity`] and everything that came back over the wire is
//! judged by [`mapper::map`](super::mapper::map).
//!
//! ## Dropping a loader
//!
//! The transport callback only holds a [`Weak`] handle to the loader's
//! liveness token.  If the loader is dropped before the transport answers,
//! the pending completion is discarded instead of called.

use std::sync::{Arc, Weak};

use tracing::{debug, warn};
use url::Url;

use super::{mapper, FeedLoader, LoadCompletion, LoadError, LoadResult};
use crate::http::{HttpClient, HttpClientResult};

/// Loads feed items from a remote URL through an [`HttpClient`].
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    /// Upgraded by in-flight callbacks; dropping the loader drops the last
    /// strong reference.
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    /// Create a loader for `url`.
    ///
    /// Nothing is requested until [`load`](Self::load) is called.
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    /// The URL every load fetches.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the feed once and deliver the result to `completion`.
    ///
    /// `completion` runs on whatever thread or task the transport answers
    /// on, at most once, and not at all if `self` is dropped first.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        debug!(url = %self.url, "loading feed");

        self.client.get(
            &self.url,
            Box::new(move |outcome| {
                if alive.upgrade().is_none() {
                    debug!("loader dropped before the response arrived, discarding");
                    return;
                }
                completion(into_load_result(outcome));
            }),
        );
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: LoadCompletion) {
        RemoteFeedLoader::load(self, completion);
    }
}

fn into_load_result(outcome: HttpClientResult) -> LoadResult {
    let result = match outcome {
        Ok(response) => mapper::map(response.status, &response.body),
        Err(error) => {
            warn!("feed request failed: {error:#}");
            Err(LoadError::Connectivity)
        }
    };

    match &result {
        Ok(items) => debug!(count = items.len(), "feed loaded"),
        Err(kind) => debug!(%kind, "feed load failed"),
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpCompletion, HttpResponse};
    use std::sync::Mutex;

    /// Captures every request so the test decides when (and how) it completes.
    #[derive(Default)]
    struct HttpClientSpy {
        messages: Mutex<Vec<(Url, HttpCompletion)>>,
    }

    impl HttpClient for HttpClientSpy {
        fn get(&self, url: &Url, completion: HttpCompletion) {
            self.messages.lock().unwrap().push((url.clone(), completion));
        }
    }

    impl HttpClientSpy {
        fn complete(&self, outcome: HttpClientResult) {
            let (_, completion) = self.messages.lock().unwrap().remove(0);
            completion(outcome);
        }
    }

    fn make_sut() -> (RemoteFeedLoader, Arc<HttpClientSpy>) {
        let client = Arc::new(HttpClientSpy::default());
        let url = Url::parse("https://a-url.com").unwrap();
        (RemoteFeedLoader::new(url, client.clone()), client)
    }

    fn capture(sut: &RemoteFeedLoader) -> Arc<Mutex<Vec<LoadResult>>> {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();
        sut.load(move |result| sink.lock().unwrap().push(result));
        captured
    }

    #[test]
    fn transport_error_maps_to_connectivity() {
        let (sut, client) = make_sut();
        let captured = capture(&sut);

        client.complete(Err(anyhow::anyhow!("offline")));

        assert_eq!(*captured.lock().unwrap(), vec![Err(LoadError::Connectivity)]);
    }

    #[test]
    fn response_is_delegated_to_mapper() {
        let (sut, client) = make_sut();
        let captured = capture(&sut);

        client.complete(Ok(HttpResponse::new(200, br#"{"items":[]}"#.to_vec())));

        assert_eq!(*captured.lock().unwrap(), vec![Ok(vec![])]);
    }

    #[test]
    fn dropped_loader_discards_completion() {
        let (sut, client) = make_sut();
        let captured = capture(&sut);

        drop(sut);
        client.complete(Err(anyhow::anyhow!("late")));

        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn url_accessor_returns_configured_url() {
        let (sut, _) = make_sut();
        assert_eq!(sut.url().as_str(), "https://a-url.com/");
    }
}
