//! Handler configuration.

use std::env::VarError;

use bl_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable naming the bucket to list.
pub const BUCKET_NAME_VAR: &str = "BUCKET_NAME";

/// Validated configuration for the listing handler.
///
/// Built once at start-up. A missing or empty bucket name is rejected here,
/// before any storage client is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Name of the bucket to list
    pub bucket: String,
}

impl HandlerConfig {
    /// Create a configuration for `bucket`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the name is empty or only
    /// whitespace.
    pub fn new(bucket: impl Into<String>) -> Result<Self, ConfigError> {
        let bucket = bucket.into();
        if bucket.trim().is_empty() {
            return Err(ConfigError::invalid(BUCKET_NAME_VAR, "must not be empty"));
        }
        Ok(Self { bucket })
    }

    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if `BUCKET_NAME` is not set, and
    /// [`ConfigError::Invalid`] if it is empty or not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(BUCKET_NAME_VAR))
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_var(lookup(BUCKET_NAME_VAR).ok_or(VarError::NotPresent))
    }

    /// Build the configuration from the result of reading `BUCKET_NAME`.
    pub fn from_var(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(bucket) => Self::new(bucket),
            Err(VarError::NotPresent) => Err(ConfigError::missing(BUCKET_NAME_VAR)),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::invalid(
                BUCKET_NAME_VAR,
                "not valid unicode",
            )),
        }
    }
}
