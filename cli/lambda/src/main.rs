//! bl-lambda
//!
//! AWS Lambda function that lists the blobs in `BUCKET_NAME`.

use bl_cli_common::build_lister;
use bl_handler::{HandlerConfig, ListBlobsHandler};
use clap::Parser;
use lambda_runtime::{run, service_fn};
use tracing::info;

mod args;
mod function;

use args::Cli;
use function::function_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    bl_cli_common::init_logging(args.log_level, args.log_format)?;

    // Cold start: a missing bucket fails here, before any client exists
    let handler =
        ListBlobsHandler::initialize(HandlerConfig::from_env, || build_lister(&args.storage))
            .await?;

    info!(
        bucket = %handler.config().bucket,
        backend = ?args.storage.backend,
        "Function initialized"
    );

    run(service_fn(|event| function_handler(event, &handler)))
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {e}"))
}
