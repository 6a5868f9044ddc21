//! Classification of GCS listing failures.

use bl_error::{StorageError, StorageErrorKind};
use google_cloud_gax::error::rpc::Code;

/// Classify a failed GCS call from its RPC status code and HTTP status.
///
/// Authentication:
/// - `UNAUTHENTICATED`, `PERMISSION_DENIED`
/// - HTTP 401 and 403
///
/// Bucket not found:
/// - `NOT_FOUND`
/// - HTTP 404
///
/// Everything else is a transient service error.
pub fn classify_status(code: Option<&Code>, http_status: Option<u16>) -> StorageErrorKind {
    match code {
        Some(Code::Unauthenticated) | Some(Code::PermissionDenied) => {
            return StorageErrorKind::Authentication;
        }
        Some(Code::NotFound) => return StorageErrorKind::BucketNotFound,
        _ => {}
    }

    match http_status {
        Some(401) | Some(403) => StorageErrorKind::Authentication,
        Some(404) => StorageErrorKind::BucketNotFound,
        _ => StorageErrorKind::TransientService,
    }
}

/// Convert a failed listing call into a [`StorageError`].
pub fn classify_list_error(bucket: &str, err: google_cloud_storage::Error) -> StorageError {
    let kind = classify_status(err.status().map(|s| &s.code), err.http_status_code());
    let message = err.to_string();

    StorageError::new(kind, bucket, message, Some(Box::new(err)))
}
