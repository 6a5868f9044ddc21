//! Error types and classification for bucketlist.
//!
//! This crate provides:
//! - [`BlError`] - Top-level error enum for the listing function
//! - Domain-specific errors ([`ConfigError`], [`StorageError`])
//! - [`ErrorCategory`] for reporting whether a failure is worth re-invoking
//!
//! Errors are never retried inside the function. The category only tells the
//! caller (or whoever reads the logs) what kind of failure it was.

use thiserror::Error;

/// Boxed source error carried by storage failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, BlError>;

/// Top-level error type for bucketlist.
#[derive(Error, Debug)]
pub enum BlError {
    /// Configuration errors (missing or unusable settings)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage errors raised while listing a bucket
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Failures outside the listing itself, such as a storage client that
    /// cannot be built (no ambient credentials, bad endpoint)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlError {
    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BlError::Config(_) => ErrorCategory::Permanent,
            BlError::Storage(e) => e.kind().category(),
            BlError::Other(_) => ErrorCategory::Permanent,
        }
    }

    /// Returns true if this is a configuration-class error.
    pub fn is_config(&self) -> bool {
        matches!(self, BlError::Config(_))
    }
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key is not set
    #[error("missing required setting {key}")]
    MissingKey { key: String },

    /// A key is set but its value cannot be used
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    /// Create a missing-key error.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Create an invalid-value error.
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Storage errors raised by a blob listing.
///
/// Every variant keeps the underlying client error as its source so the
/// original failure stays observable by the caller.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage service rejected the credentials or denied access
    #[error("Authentication failed for bucket {bucket}: {message}")]
    Authentication {
        bucket: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The bucket does not exist
    #[error("Bucket not found: {bucket}: {message}")]
    BucketNotFound {
        bucket: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Network or service-side failure
    #[error("Service error listing bucket {bucket}: {message}")]
    TransientService {
        bucket: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

/// Kind of a [`StorageError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// See [`StorageError::Authentication`]
    Authentication,
    /// See [`StorageError::BucketNotFound`]
    BucketNotFound,
    /// See [`StorageError::TransientService`]
    TransientService,
}

impl StorageErrorKind {
    /// Category used for reporting.
    pub fn category(self) -> ErrorCategory {
        match self {
            StorageErrorKind::Authentication => ErrorCategory::Permanent,
            StorageErrorKind::BucketNotFound => ErrorCategory::Permanent,
            StorageErrorKind::TransientService => ErrorCategory::Transient,
        }
    }
}

impl StorageError {
    /// Build a storage error of the given kind.
    pub fn new(
        kind: StorageErrorKind,
        bucket: impl Into<String>,
        message: impl Into<String>,
        source: Option<BoxError>,
    ) -> Self {
        let bucket = bucket.into();
        let message = message.into();
        match kind {
            StorageErrorKind::Authentication => Self::Authentication {
                bucket,
                message,
                source,
            },
            StorageErrorKind::BucketNotFound => Self::BucketNotFound {
                bucket,
                message,
                source,
            },
            StorageErrorKind::TransientService => Self::TransientService {
                bucket,
                message,
                source,
            },
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            StorageError::Authentication { .. } => StorageErrorKind::Authentication,
            StorageError::BucketNotFound { .. } => StorageErrorKind::BucketNotFound,
            StorageError::TransientService { .. } => StorageErrorKind::TransientService,
        }
    }

    /// The bucket the failed listing targeted.
    pub fn bucket(&self) -> &str {
        match self {
            StorageError::Authentication { bucket, .. }
            | StorageError::BucketNotFound { bucket, .. }
            | StorageError::TransientService { bucket, .. } => bucket,
        }
    }
}

/// Error classification for reporting.
///
/// Nothing in the function retries on its own; a `Transient` error means a
/// fresh invocation may succeed, a `Permanent` one means it will not until
/// configuration or permissions change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transient error
    ///
    /// Examples: network timeout, S3 503, throttling
    Transient,

    /// Permanent error
    ///
    /// Examples: missing BUCKET_NAME, access denied, bucket not found,
    /// storage client construction failure
    Permanent,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transient => write!(f, "Transient"),
            Self::Permanent => write!(f, "Permanent"),
        }
    }
}
