//! Maps a completed HTTP response into a [`LoadResult`].
//!
//! The body is decoded into private wire DTOs first, then every item is
//! validated and converted into a [`FeedItem`] in one pass.  A single bad item
//! rejects the whole response: callers either get every item or none.
//!
//! Nothing in here performs I/O, so the whole protocol can be exercised with
//! plain byte strings.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;
use uuid::{fmt::Hyphenated, Uuid};

use super::{FeedItem, LoadError, LoadResult};

/// The only status code whose body is even looked at.
const OK_200: u16 = 200;

/// Top-level wire shape: `{"items": [...]}`.
#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RawItemPayload>,
}

/// One item exactly as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawItemPayload {
    id: String,
    description: Option<String>,
    location: Option<String>,
    image: String,
}

/// Concrete reason a response was rejected.  Logged, then collapsed into
/// [`LoadError::InvalidData`].
#[derive(Debug, Error)]
enum MapError {
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed feed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("item {index}: id {id:?} is not a UUID: {source}")]
    Id {
        index: usize,
        id: String,
        source: uuid::Error,
    },
    #[error("item {index}: id {id:?} is not in hyphenated 8-4-4-4-12 form")]
    IdForm { index: usize, id: String },
    #[error("item {index}: image {image:?} is not a URL: {source}")]
    Image {
        index: usize,
        image: String,
        source: url::ParseError,
    },
}

impl RawItemPayload {
    fn into_item(self, index: usize) -> Result<FeedItem, MapError> {
        let id = Uuid::parse_str(&self.id).map_err(|source| MapError::Id {
            index,
            id: self.id.clone(),
            source,
        })?;
        // `parse_str` also takes simple, braced and URN forms.
        if self.id.len() != Hyphenated::LENGTH {
            return Err(MapError::IdForm {
                index,
                id: self.id,
            });
        }
        let image_url = Url::parse(&self.image).map_err(|source| MapError::Image {
            index,
            image: self.image.clone(),
            source,
        })?;

        Ok(FeedItem::new(id, self.description, self.location, image_url))
    }
}

/// Map a status code and body into a load result.
///
/// Anything other than a `200` with a well-formed `items` payload yields
/// [`LoadError::InvalidData`].  An empty `items` array is a valid, empty
/// success.
pub fn map(status_code: u16, body: &[u8]) -> LoadResult {
    try_map(status_code, body).map_err(|error| {
        debug!(%error, "rejecting feed response");
        LoadError::InvalidData
    })
}

fn try_map(status_code: u16, body: &[u8]) -> Result<Vec<FeedItem>, MapError> {
    if status_code != OK_200 {
        return Err(MapError::Status(status_code));
    }

    let root: Root = serde_json::from_slice(body)?;
    root.items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_item(index))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
