//! livescroll-feed: load a remote JSON feed into validated items.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  load()  ┌──────────────────┐  get()   ┌──────────────┐
//! │  caller  │ ───────► │ RemoteFeedLoader │ ───────► │  HttpClient  │
//! └──────────┘          └──────────────────┘          └──────────────┘
//!      ▲                    │         ▲   (status, body) or error │
//!      │   LoadResult       ▼         └───────────────────────────┘
//!      └──────────────── mapper::map
//! ```
//!
//! * **`source/`**: the `FeedLoader` trait, `FeedItem`, the load result
//!   types, the response mapper and the remote loader.
//! * **`http/`**: the `HttpClient` transport capability and its reqwest
//!   implementation.
//!
//! The terminal viewer in `main.rs` is one caller of this library; nothing in
//! here knows about it.

pub mod http;
pub mod source;
