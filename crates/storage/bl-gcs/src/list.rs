//! GCS object listing.

use async_stream::try_stream;
use bl_error::{BlError, Result};
use bl_types::BlobDescriptor;
use chrono::DateTime;
use futures::Stream;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;
use tracing::debug;

use crate::error::classify_list_error;

/// Resource name of a bucket as the storage control API expects it.
pub fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{bucket}")
}

/// List every object in a GCS bucket.
///
/// Returns a stream of [`BlobDescriptor`] items in the order the service
/// returns them (lexicographic by name). The paginator fetches the next page
/// whenever the current one is exhausted, so the whole bucket is listed.
///
/// The first failed request ends the stream with a classified
/// [`StorageError`](bl_error::StorageError).
pub fn list_objects<'a>(
    client: &'a StorageControl,
    bucket: &'a str,
) -> impl Stream<Item = Result<BlobDescriptor>> + Send + 'a {
    try_stream! {
        let mut objects = client
            .list_objects()
            .set_parent(bucket_resource(bucket))
            .by_item();
        let mut count = 0usize;

        while let Some(obj) = objects
            .next()
            .await
            .transpose()
            .map_err(|e| BlError::from(classify_list_error(bucket, e)))?
        {
            if let Some(blob) = descriptor_from_object(obj) {
                count += 1;
                yield blob;
            }
        }

        debug!(bucket = %bucket, objects = count, "Finished listing");
    }
}

/// Convert a listed GCS object into a descriptor.
///
/// Returns `None` for entries without a name.
pub fn descriptor_from_object(obj: Object) -> Option<BlobDescriptor> {
    if obj.name.is_empty() {
        return None;
    }

    let last_modified = obj.update_time.and_then(|t| {
        u32::try_from(t.nanos())
            .ok()
            .and_then(|nanos| DateTime::from_timestamp(t.seconds(), nanos))
    });

    Some(BlobDescriptor {
        name: obj.name,
        size: u64::try_from(obj.size).ok(),
        last_modified,
        etag: Some(obj.etag).filter(|etag| !etag.is_empty()),
    })
}
