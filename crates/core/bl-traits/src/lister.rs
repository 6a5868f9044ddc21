//! Blob listing trait.

use bl_error::Result;
use bl_types::BlobDescriptor;
use futures::stream::BoxStream;

/// A lazy, ordered stream of blob descriptors.
///
/// Items are produced as the stream is polled. An `Err` item ends the
/// listing; consumers must not expect further items after it.
pub type BlobStream<'a> = BoxStream<'a, Result<BlobDescriptor>>;

/// Read-only capability for listing the blobs in a bucket.
///
/// This is the only operation the listing function needs from a storage
/// service. Implementations include:
/// - S3 via `aws-sdk-s3` (production)
/// - [`InMemoryLister`](crate::InMemoryLister) (tests, local development)
///
/// # Contract
///
/// - One call to [`list_blobs`](BlobLister::list_blobs) is one logical
///   listing of the whole bucket. Paging, if the service needs it, happens
///   inside the returned stream.
/// - Descriptors are yielded in the order the service returns them.
/// - Implementations never write to or delete from the bucket.
pub trait BlobLister: Send + Sync {
    /// Lists every blob in `bucket`.
    fn list_blobs<'a>(&'a self, bucket: &'a str) -> BlobStream<'a>;
}

impl<T: BlobLister + ?Sized> BlobLister for &T {
    fn list_blobs<'a>(&'a self, bucket: &'a str) -> BlobStream<'a> {
        (**self).list_blobs(bucket)
    }
}

impl<T: BlobLister + ?Sized> BlobLister for Box<T> {
    fn list_blobs<'a>(&'a self, bucket: &'a str) -> BlobStream<'a> {
        (**self).list_blobs(bucket)
    }
}

impl<T: BlobLister + ?Sized> BlobLister for std::sync::Arc<T> {
    fn list_blobs<'a>(&'a self, bucket: &'a str) -> BlobStream<'a> {
        (**self).list_blobs(bucket)
    }
}
