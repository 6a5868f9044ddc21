//! Main execution logic for bl-invoke.

use bl_error::{BlError, ConfigError, Result};
use bl_cli_common::build_lister;
use bl_handler::{BUCKET_NAME_VAR, HandlerConfig, ListBlobsHandler};
use bl_types::FilenamesResponse;

use crate::args::Cli;

/// Build the handler configuration from the arguments.
pub fn handler_config(args: &Cli) -> std::result::Result<HandlerConfig, ConfigError> {
    match &args.bucket {
        Some(bucket) => HandlerConfig::new(bucket.as_str()),
        None => Err(ConfigError::missing(BUCKET_NAME_VAR)),
    }
}

/// Run a single invocation.
///
/// Configuration is validated before the storage client is created.
pub async fn execute(args: &Cli) -> Result<FilenamesResponse> {
    let handler =
        ListBlobsHandler::initialize(|| handler_config(args), || build_lister(&args.storage))
            .await?;

    handler.handle().await
}

/// Serialize the response for stdout.
pub fn render(response: &FilenamesResponse, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
}

/// Process exit code for a failed invocation.
pub fn exit_code(error: &BlError) -> i32 {
    match error {
        BlError::Config(_) => 1,
        BlError::Storage(_) => 2,
        BlError::Other(_) => 3,
    }
}
