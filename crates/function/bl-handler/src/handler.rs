//! The listing handler.

use std::time::Instant;

use bl_error::{ConfigError, Result};
use bl_traits::BlobLister;
use bl_types::FilenamesResponse;
use futures::TryStreamExt;
use tracing::{debug, info};

use crate::config::HandlerConfig;

/// Lists one bucket per invocation and returns the blob names.
///
/// Holds no per-invocation state, so a single instance can serve any number
/// of invocations, concurrently or not.
pub struct ListBlobsHandler<L: BlobLister> {
    config: HandlerConfig,
    lister: L,
}

impl<L: BlobLister> ListBlobsHandler<L> {
    /// Create a handler.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated handler configuration
    /// * `lister` - Storage capability used to list the bucket
    pub fn new(config: HandlerConfig, lister: L) -> Self {
        Self { config, lister }
    }

    /// Run the start-up sequence.
    ///
    /// The configuration is resolved first; `build_lister` is only called
    /// once it is valid, so a missing bucket name never creates a storage
    /// client.
    pub async fn initialize<C, B, Fut>(config: C, build_lister: B) -> Result<Self>
    where
        C: FnOnce() -> std::result::Result<HandlerConfig, ConfigError>,
        B: FnOnce() -> Fut,
        Fut: Future<Output = Result<L>>,
    {
        let config = config()?;
        let lister = build_lister().await?;
        Ok(Self::new(config, lister))
    }

    /// The configuration this handler was built with.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Run one invocation.
    ///
    /// Issues a single listing of the configured bucket, consumes it to the
    /// end and returns one name per blob in the order the lister yielded
    /// them. The first listing error is returned as-is; there is no partial
    /// result.
    pub async fn handle(&self) -> Result<FilenamesResponse> {
        let started = Instant::now();
        let bucket = self.config.bucket.as_str();

        debug!(bucket = %bucket, "Listing blobs");

        let mut blobs = self.lister.list_blobs(bucket);
        let mut response = FilenamesResponse::new();

        while let Some(blob) = blobs.try_next().await? {
            response.push(blob);
        }

        info!(
            bucket = %bucket,
            blob_count = response.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Listed blobs"
        );

        Ok(response)
    }
}
