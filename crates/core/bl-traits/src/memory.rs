//! In-memory blob lister.

use std::sync::atomic::{AtomicUsize, Ordering};

use bl_error::{BlError, StorageError, StorageErrorKind};
use bl_types::BlobDescriptor;
use futures::StreamExt;
use futures::stream;

use crate::{BlobLister, BlobStream};

/// A [`BlobLister`] backed by a fixed list of descriptors.
///
/// Records how many listings were started and how many descriptors were
/// pulled from them, and can be told to fail part-way through a listing.
#[derive(Debug, Default)]
pub struct InMemoryLister {
    blobs: Vec<BlobDescriptor>,
    failure: Option<(usize, StorageErrorKind)>,
    list_calls: AtomicUsize,
    yielded: AtomicUsize,
}

impl InMemoryLister {
    /// Create a lister that yields `blobs` in order.
    pub fn new(blobs: Vec<BlobDescriptor>) -> Self {
        Self {
            blobs,
            ..Default::default()
        }
    }

    /// Create a lister that yields descriptors carrying only the given names.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(BlobDescriptor::new).collect())
    }

    /// Fail with an error of `kind` after `after` descriptors were yielded.
    pub fn failing_after(mut self, after: usize, kind: StorageErrorKind) -> Self {
        self.failure = Some((after, kind));
        self
    }

    /// Number of times [`list_blobs`](BlobLister::list_blobs) was called.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of items (descriptors or errors) pulled from all listings.
    pub fn yielded(&self) -> usize {
        self.yielded.load(Ordering::SeqCst)
    }
}

impl BlobLister for InMemoryLister {
    fn list_blobs<'a>(&'a self, bucket: &'a str) -> BlobStream<'a> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let (take, error) = match self.failure {
            Some((after, kind)) => (
                after.min(self.blobs.len()),
                Some(StorageError::new(
                    kind,
                    bucket,
                    "injected failure",
                    None,
                )),
            ),
            None => (self.blobs.len(), None),
        };

        let items = self.blobs[..take]
            .iter()
            .cloned()
            .map(Ok)
            .chain(error.map(|e| Err(BlError::from(e))));

        stream::iter(items)
            .inspect(move |_| {
                self.yielded.fetch_add(1, Ordering::SeqCst);
            })
            .boxed()
    }
}
