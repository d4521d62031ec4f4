//! # explora-io
//!
//! Readers for exploration pages. Everything in this crate is read-only: the
//! front-end never writes page records back.
//!
//! - [`RestBackend`]: the hosted database, queried over its REST interface
//! - [`JsonFileBackend`]: a JSON document on disk (fixtures, demos)
//! - [`StaticBackend`]: pages held in memory
//!
//! All of them implement [`PageBackend`], the only interface the UI services
//! depend on.

pub mod backend;
pub mod error;
pub mod file;
pub mod rest;

pub use backend::{PageBackend, StaticBackend};
pub use error::{BackendError, BackendResult};
pub use file::JsonFileBackend;
pub use rest::{RestBackend, RestBackendOptions};
