//! Core types for bucketlist.
//!
//! This crate provides the types shared between the storage adapters and the
//! function handler:
//! - [`BlobDescriptor`] - A remote object as yielded by a listing
//! - [`FilenamesResponse`] - The payload returned by the function

pub mod blob;
pub mod response;

pub use blob::*;
pub use response::*;
