//! bl-s3 - S3 blob listing for bucketlist.
//!
//! This crate implements [`BlobLister`](bl_traits::BlobLister) on top of
//! `aws-sdk-s3`:
//!
//! - Client configuration with ambient credentials and LocalStack support
//! - Paginated `ListObjectsV2` listing exposed as a lazy stream
//! - Classification of SDK failures into the storage error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use bl_s3::{S3BlobLister, S3Config, create_s3_client};
//!
//! let config = S3Config::new()
//!     .with_region("us-east-1")
//!     .with_endpoint("http://localhost:4566");
//!
//! let client = create_s3_client(&config).await?;
//! let lister = S3BlobLister::new(client);
//! ```

mod client;
mod error;
mod list;
mod lister;

pub use client::{S3Config, create_s3_client};
pub use error::{classify_list_error, classify_service_error};
pub use list::{descriptor_from_object, list_objects};
pub use lister::S3BlobLister;
