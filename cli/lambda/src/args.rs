//! Settings for the Lambda function.
//!
//! Lambda starts the binary without arguments, so every setting is read
//! from the environment.

use bl_cli_common::{LogFormat, LogLevel, StorageArgs};
use clap::Parser;

/// AWS Lambda function listing the blobs in a bucket.
///
/// The bucket is read from `BUCKET_NAME` at cold start.
#[derive(Parser, Debug)]
#[command(name = "bl-lambda")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Log level
    #[arg(long, env = "BL_LOG_LEVEL", value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "BL_LOG_FORMAT", value_enum, default_value = "json")]
    pub log_format: LogFormat,
}
