//! CLI argument definitions for bl-invoke.

use bl_cli_common::{LogFormat, LogLevel, StorageArgs};
use clap::Parser;

/// Run the bucket listing function once.
///
/// Lists every blob in the bucket and prints `{"filenames": [...]}` to
/// stdout, exactly as the Lambda function would return it.
///
/// ## Examples
///
/// Against AWS, using the default credential chain:
///   BUCKET_NAME=my-bucket bl-invoke
///
/// Against LocalStack:
///   bl-invoke -b my-bucket --s3-endpoint http://localhost:4566 --region us-east-1
///
/// Against Google Cloud Storage, using Application Default Credentials:
///   bl-invoke -b my-bucket --backend gcs
#[derive(Parser, Debug)]
#[command(name = "bl-invoke")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Bucket to list
    #[arg(short, long, env = "BUCKET_NAME")]
    pub bucket: Option<String>,

    #[command(flatten)]
    pub storage: StorageArgs,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}
