//! Argument types shared by the binaries.

use bl_gcs::GcsConfig;
use bl_s3::S3Config;
use clap::{Args, ValueEnum};

/// Storage service holding the bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Amazon S3 (or LocalStack)
    #[default]
    S3,
    /// Google Cloud Storage
    Gcs,
}

/// Storage backend options.
#[derive(Args, Debug, Clone, Default)]
pub struct StorageArgs {
    /// Storage service to list
    #[arg(long, env = "BL_BACKEND", value_enum, default_value = "s3")]
    pub backend: Backend,

    #[command(flatten)]
    pub s3: S3Args,

    /// Custom GCS endpoint URL (for emulators)
    #[arg(long, env = "BL_GCS_ENDPOINT")]
    pub gcs_endpoint: Option<String>,
}

impl StorageArgs {
    /// Build the GCS client configuration.
    pub fn to_gcs_config(&self) -> GcsConfig {
        match &self.gcs_endpoint {
            Some(endpoint) => GcsConfig::new().with_endpoint(endpoint),
            None => GcsConfig::new(),
        }
    }
}

/// S3 connection options.
///
/// Credentials are never passed on the command line; the default AWS
/// provider chain resolves them.
#[derive(Args, Debug, Clone, Default)]
pub struct S3Args {
    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "BL_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,
}

impl S3Args {
    /// Build the S3 client configuration.
    pub fn to_s3_config(&self) -> S3Config {
        let mut config = S3Config::new();

        if let Some(endpoint) = &self.s3_endpoint {
            config = config.with_endpoint(endpoint);
        }

        if let Some(region) = &self.region {
            config = config.with_region(region);
        }

        if let Some(profile) = &self.profile {
            config = config.with_profile(profile);
        }

        config
    }
}

/// Log level argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event (for CloudWatch)
    Json,
}
