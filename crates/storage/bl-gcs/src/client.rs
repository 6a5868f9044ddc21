//! GCS client configuration and creation.

use bl_error::{BlError, Result};
use google_cloud_storage::client::StorageControl;
use serde::{Deserialize, Serialize};

/// Configuration for Google Cloud Storage access.
///
/// Credentials always come from Application Default Credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcsConfig {
    /// Custom endpoint URL (for emulators)
    pub endpoint: Option<String>,
}

impl GcsConfig {
    /// Create a new GcsConfig that relies entirely on the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Create a storage control client from configuration.
///
/// # Errors
///
/// Returns [`BlError::Other`] if the client cannot be built, for example
/// when no credentials can be found.
pub async fn create_gcs_client(config: &GcsConfig) -> Result<StorageControl> {
    let mut builder = StorageControl::builder();

    if let Some(endpoint) = &config.endpoint {
        builder = builder.with_endpoint(endpoint);
    }

    builder.build().await.map_err(client_build_error)
}

/// Wrap a client construction failure.
pub fn client_build_error<E>(error: E) -> BlError
where
    E: std::error::Error + Send + Sync + 'static,
{
    BlError::Other(anyhow::Error::new(error).context("Failed to build GCS client"))
}
