//! Lambda invocation adapter.

use bl_handler::ListBlobsHandler;
use bl_traits::BlobLister;
use bl_types::FilenamesResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::warn;

/// Handle one Lambda invocation.
///
/// The payload can be any JSON value (direct invoke, function URL, API
/// Gateway); none of it is read.
pub(crate) async fn function_handler<L: BlobLister>(
    event: LambdaEvent<Value>,
    handler: &ListBlobsHandler<L>,
) -> Result<FilenamesResponse, Error> {
    match handler.handle().await {
        Ok(response) => Ok(response),
        Err(e) => {
            warn!(
                request_id = %event.context.request_id,
                category = %e.category(),
                error = %e,
                "Invocation failed"
            );
            Err(e.into())
        }
    }
}
