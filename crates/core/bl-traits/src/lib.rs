//! Core traits for bucketlist.
//!
//! This crate defines the storage abstraction the handler is written against:
//! - [`BlobLister`] - Capability that lists the blobs in a bucket
//! - [`InMemoryLister`] - In-memory implementation for tests and local runs

pub mod lister;
pub mod memory;

pub use lister::*;
pub use memory::*;
