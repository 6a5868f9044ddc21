//! [`BlobLister`] implementation for S3.

use aws_sdk_s3::Client;
use bl_traits::{BlobLister, BlobStream};
use futures::StreamExt;

use crate::list::list_objects;

/// Lists blobs with an `aws-sdk-s3` client.
///
/// The client is a read-only handle here and is safe to share across
/// concurrent invocations.
#[derive(Debug, Clone)]
pub struct S3BlobLister {
    client: Client,
}

impl S3BlobLister {
    /// Create a lister around an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl BlobLister for S3BlobLister {
    fn list_blobs<'a>(&'a self, bucket: &'a str) -> BlobStream<'a> {
        list_objects(&self.client, bucket).boxed()
    }
}
