//! Feed loader abstraction layer.
//!
//! This module defines the [`FeedLoader`] trait, the [`FeedItem`] type and the
//! [`LoadResult`] every loader delivers.  Concrete loaders live in
//! sub-modules (currently only [`RemoteFeedLoader`]).
//!
//! ## For contributors: adding a new loader
//!
//! 1. Create a new file in this directory (e.g. `local.rs`).
//! 2. Define a struct (e.g. `LocalFeedLoader`) and implement [`FeedLoader`]
//!    for it.
//! 3. Add `mod local;` below and re-export your struct in the `pub use` block.
//! 4. Construct it in `main.rs` and hand it to the poller.

mod feed_item;
mod load;
pub mod mapper;
mod remote;

// Re-export the public API of this module so callers can write
// `use livescroll_feed::source::{FeedItem, FeedLoader, RemoteFeedLoader};`
pub use feed_item::FeedItem;
pub use load::{LoadCompletion, LoadError, LoadResult};
pub use remote::RemoteFeedLoader;

/// Trait that every feed loader implements.
///
/// The poller calls [`load()`](FeedLoader::load) from a background thread, so
/// implementations must be [`Send`] and [`Sync`].
///
/// ## Contract
///
/// Each call delivers exactly one [`LoadResult`] to `completion`, possibly
/// later and on another thread.  A loader that is dropped before it answers
/// may skip the call entirely.
pub trait FeedLoader: Send + Sync {
    fn load(&self, completion: LoadCompletion);
}
