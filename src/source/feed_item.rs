//! The core data type produced by every feed loader.
//!
//! `FeedItem` represents a single validated entry from a remote feed.  Loaders
//! convert their wire format into `FeedItem`s so the rest of the application
//! never sees raw payloads.
//!
//! ## For contributors
//!
//! A `FeedItem` is only ever constructed from data that already passed
//! validation: the `id` is a real UUID and the `image_url` a parsed URL.  Keep
//! it that way: if a new field needs checking, check it in the mapper before
//! building the item.

use url::Url;
use uuid::Uuid;

/// A single feed entry.
///
/// Equality is structural: two items are equal when every field is equal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FeedItem {
    /// Globally unique identifier of the item.
    pub id: Uuid,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Optional human-readable location (e.g. "Porto, Portugal").
    pub location: Option<String>,

    /// Image shown for this item.  Always present and well-formed.
    pub image_url: Url,
}

impl FeedItem {
    /// Build an item from already-validated parts.
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }

    /// First block of the UUID, handy for compact display.
    pub fn short_id(&self) -> String {
        self.id
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
