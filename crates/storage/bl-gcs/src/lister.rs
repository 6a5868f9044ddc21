//! [`BlobLister`] implementation for Google Cloud Storage.

use bl_traits::{BlobLister, BlobStream};
use futures::StreamExt;
use google_cloud_storage::client::StorageControl;

use crate::list::list_objects;

/// Lists blobs with a `google-cloud-storage` control client.
#[derive(Debug, Clone)]
pub struct GcsBlobLister {
    client: StorageControl,
}

impl GcsBlobLister {
    /// Create a lister around an existing client.
    pub fn new(client: StorageControl) -> Self {
        Self { client }
    }
}

impl BlobLister for GcsBlobLister {
    fn list_blobs<'a>(&'a self, bucket: &'a str) -> BlobStream<'a> {
        list_objects(&self.client, bucket).boxed()
    }
}
