//! Classification of S3 listing failures.
//!
//! Maps SDK errors onto [`StorageErrorKind`]. Nothing here retries; the
//! classified error is handed straight back to the caller with the SDK error
//! kept as its source.

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use bl_error::{StorageError, StorageErrorKind};

/// S3 error codes that mean the caller is not allowed to list the bucket.
const AUTH_CODES: &[&str] = &[
    "AccessDenied",
    "AllAccessDisabled",
    "AccountProblem",
    "ExpiredToken",
    "InvalidAccessKeyId",
    "InvalidSecurity",
    "InvalidToken",
    "SignatureDoesNotMatch",
    "TokenRefreshRequired",
];

/// Classify a failed S3 call from its error code and HTTP status.
///
/// Authentication:
/// - Credential and permission error codes (`AccessDenied`,
///   `InvalidAccessKeyId`, `SignatureDoesNotMatch`, `ExpiredToken`, ...)
/// - HTTP 401 and 403
///
/// Bucket not found:
/// - `NoSuchBucket`
/// - HTTP 404
///
/// Everything else (no response at all, 5xx, throttling, unknown codes) is a
/// transient service error.
pub fn classify_service_error(code: Option<&str>, status: Option<u16>) -> StorageErrorKind {
    if let Some(code) = code {
        if AUTH_CODES.contains(&code) {
            return StorageErrorKind::Authentication;
        }
        if code == "NoSuchBucket" {
            return StorageErrorKind::BucketNotFound;
        }
    }

    match status {
        Some(401) | Some(403) => StorageErrorKind::Authentication,
        Some(404) => StorageErrorKind::BucketNotFound,
        _ => StorageErrorKind::TransientService,
    }
}

/// Convert a failed `ListObjectsV2` call into a [`StorageError`].
pub fn classify_list_error(bucket: &str, err: SdkError<ListObjectsV2Error>) -> StorageError {
    let status = err.raw_response().map(|resp| resp.status().as_u16());
    let kind = classify_service_error(err.code(), status);
    let message = DisplayErrorContext(&err).to_string();

    StorageError::new(kind, bucket, message, Some(Box::new(err)))
}
