//! bl-handler - the bucket listing function.
//!
//! The handler lists every blob in one bucket and returns their names as
//! `{"filenames": [...]}`. It is written against the
//! [`BlobLister`](bl_traits::BlobLister) capability, so the storage backend
//! and the invocation runtime are both supplied from outside.
//!
//! # Example
//!
//! ```ignore
//! use bl_handler::{HandlerConfig, ListBlobsHandler};
//!
//! // Fails fast if BUCKET_NAME is missing, before any client is built
//! let handler =
//!     ListBlobsHandler::initialize(HandlerConfig::from_env, || build_lister(&args)).await?;
//!
//! let response = handler.handle().await?;
//! println!("{}", serde_json::to_string(&response)?);
//! ```

pub mod config;
pub mod handler;

pub use config::{BUCKET_NAME_VAR, HandlerConfig};
pub use handler::ListBlobsHandler;
