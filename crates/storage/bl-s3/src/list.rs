//! S3 object listing with pagination support.

use async_stream::try_stream;
use aws_sdk_s3::Client;
use aws_sdk_s3::types::Object;
use bl_error::{BlError, Result};
use bl_types::BlobDescriptor;
use chrono::DateTime;
use futures::Stream;
use tracing::debug;

use crate::error::classify_list_error;

/// List every object in an S3 bucket.
///
/// Returns a stream of [`BlobDescriptor`] items in the order S3 returns them
/// (lexicographic by key). Pages are requested lazily as the stream is
/// polled, following continuation tokens until the listing is complete, so
/// large buckets are never silently truncated.
///
/// Directory markers (keys ending with `/`) are objects in their own right
/// and are yielded like any other key.
///
/// The first failed page request ends the stream with a classified
/// [`StorageError`](bl_error::StorageError).
///
/// # Example
///
/// ```ignore
/// use futures::{StreamExt, pin_mut};
///
/// let stream = list_objects(&client, "my-bucket");
/// pin_mut!(stream);
///
/// while let Some(result) = stream.next().await {
///     let blob = result?;
///     println!("Found: {}", blob.name);
/// }
/// ```
pub fn list_objects<'a>(
    client: &'a Client,
    bucket: &'a str,
) -> impl Stream<Item = Result<BlobDescriptor>> + Send + 'a {
    try_stream! {
        let mut continuation_token: Option<String> = None;
        let mut page = 0u32;

        loop {
            let mut req = client.list_objects_v2().bucket(bucket);

            if let Some(ref token) = continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| BlError::from(classify_list_error(bucket, e)))?;

            page += 1;
            debug!(
                bucket = %bucket,
                page,
                objects = resp.contents.as_ref().map_or(0, Vec::len),
                truncated = ?resp.is_truncated,
                "Fetched listing page"
            );

            for obj in resp.contents.unwrap_or_default() {
                if let Some(blob) = descriptor_from_object(obj) {
                    yield blob;
                }
            }

            if resp.is_truncated == Some(true) {
                continuation_token = resp.next_continuation_token;
                if continuation_token.is_none() {
                    break;
                }
            } else {
                break;
            }
        }
    }
}

/// Convert a listed S3 object into a descriptor.
///
/// Returns `None` for entries without a key.
pub fn descriptor_from_object(obj: Object) -> Option<BlobDescriptor> {
    let name = obj.key.filter(|key| !key.is_empty())?;

    Some(BlobDescriptor {
        name,
        size: obj.size.and_then(|size| u64::try_from(size).ok()),
        last_modified: obj
            .last_modified
            .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
        etag: obj.e_tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::primitives::DateTime as SmithyDateTime;

    #[test]
    fn test_descriptor_from_object() {
        let obj = Object::builder()
            .key("data/file.parquet")
            .size(1024)
            .e_tag("\"9b2cf535f27731c974343645a3985328\"")
            .last_modified(SmithyDateTime::from_secs(1_700_000_000))
            .build();

        let blob = descriptor_from_object(obj).unwrap();

        assert_eq!(blob.name, "data/file.parquet");
        assert_eq!(blob.size, Some(1024));
        assert_eq!(
            blob.etag.as_deref(),
            Some("\"9b2cf535f27731c974343645a3985328\"")
        );
        assert_eq!(blob.last_modified.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn test_descriptor_keeps_directory_markers() {
        let obj = Object::builder().key("logs/").size(0).build();

        let blob = descriptor_from_object(obj).unwrap();

        assert_eq!(blob.name, "logs/");
        assert_eq!(blob.size, Some(0));
    }

    #[test]
    fn test_descriptor_without_key() {
        assert!(descriptor_from_object(Object::builder().size(10).build()).is_none());
        assert!(descriptor_from_object(Object::builder().key("").build()).is_none());
    }

    #[test]
    fn test_descriptor_negative_size() {
        let obj = Object::builder().key("weird").size(-1).build();

        let blob = descriptor_from_object(obj).unwrap();

        assert!(blob.size.is_none());
        assert!(blob.last_modified.is_none());
    }
}
