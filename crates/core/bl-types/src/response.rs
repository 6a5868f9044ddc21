//! Function response payload.

use serde::{Deserialize, Serialize};

use crate::BlobDescriptor;

/// The payload returned by the listing function.
///
/// Serializes as `{"filenames": [...]}`. Names keep the order in which the
/// listing yielded them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenamesResponse {
    /// Object names, in listing order
    pub filenames: Vec<String>,
}

impl FilenamesResponse {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the name of a listed blob. Other descriptor fields are dropped.
    pub fn push(&mut self, blob: BlobDescriptor) {
        self.filenames.push(blob.name);
    }

    /// Number of names in the response.
    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    /// Returns true if no names were listed.
    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }
}

impl FromIterator<BlobDescriptor> for FilenamesResponse {
    fn from_iter<I: IntoIterator<Item = BlobDescriptor>>(iter: I) -> Self {
        Self {
            filenames: iter.into_iter().map(|blob| blob.name).collect(),
        }
    }
}
