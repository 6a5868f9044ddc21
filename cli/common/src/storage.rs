//! Storage backend selection.

use bl_error::Result;
use bl_gcs::{GcsBlobLister, create_gcs_client};
use bl_s3::{S3BlobLister, create_s3_client};
use bl_traits::BlobLister;
use tracing::debug;

use crate::{Backend, StorageArgs};

/// Build the lister for the selected backend.
///
/// Clients resolve credentials from the environment; nothing is listed here.
pub async fn build_lister(args: &StorageArgs) -> Result<Box<dyn BlobLister>> {
    debug!(backend = ?args.backend, "Creating storage client");

    let lister: Box<dyn BlobLister> = match args.backend {
        Backend::S3 => {
            let client = create_s3_client(&args.s3.to_s3_config()).await?;
            Box::new(S3BlobLister::new(client))
        }
        Backend::Gcs => {
            let client = create_gcs_client(&args.to_gcs_config()).await?;
            Box::new(GcsBlobLister::new(client))
        }
    };

    Ok(lister)
}
