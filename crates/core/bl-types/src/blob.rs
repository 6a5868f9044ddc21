//! Blob descriptor type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A remote object yielded by a bucket listing.
///
/// Storage adapters fill in whatever metadata their service returns. Only
/// [`name`](BlobDescriptor::name) is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobDescriptor {
    /// Object name (the full key within the bucket)
    pub name: String,

    /// Size of the object in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Last modified timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Entity tag as reported by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl BlobDescriptor {
    /// Create a descriptor carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            last_modified: None,
            etag: None,
        }
    }

    /// Set the object size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the last modified timestamp.
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Set the entity tag.
    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }
}
