//! bl-gcs - Google Cloud Storage blob listing for bucketlist.
//!
//! This crate implements [`BlobLister`](bl_traits::BlobLister) on top of
//! `google-cloud-storage`:
//!
//! - Client creation with Application Default Credentials (including
//!   workload identity federation)
//! - Item-by-item object listing exposed as a lazy stream, with paging
//!   handled by the client's paginator
//! - Classification of RPC failures into the storage error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use bl_gcs::{GcsBlobLister, GcsConfig, create_gcs_client};
//!
//! let client = create_gcs_client(&GcsConfig::new()).await?;
//! let lister = GcsBlobLister::new(client);
//! ```

mod client;
mod error;
mod list;
mod lister;

pub use client::{GcsConfig, client_build_error, create_gcs_client};
pub use error::{classify_list_error, classify_status};
pub use list::{bucket_resource, descriptor_from_object, list_objects};
pub use lister::GcsBlobLister;
