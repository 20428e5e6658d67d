//! Result and error types shared by all feed loaders.

use thiserror::Error;

use super::FeedItem;

/// Why a load failed.
///
/// Only two kinds are ever surfaced.  Finer-grained reasons (which field was
/// missing, what the transport said) are logged but never handed to callers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadError {
    /// The fetch itself could not be completed.
    #[error("connectivity error: the feed could not be reached")]
    Connectivity,
    /// The fetch completed but the response failed validation.
    #[error("invalid data: the feed response was rejected")]
    InvalidData,
}

/// Outcome of one load: every item in payload order, or why there are none.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Callback receiving the single result of a load.
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;
