//! Shared utilities for the bucketlist binaries.
//!
//! This crate provides common functionality shared between the `bl-lambda`
//! function binary and the `bl-invoke` local runner.

pub mod args;
pub mod logging;
pub mod storage;

pub use args::{Backend, LogFormat, LogLevel, S3Args, StorageArgs};
pub use logging::init_logging;
pub use storage::build_lister;
