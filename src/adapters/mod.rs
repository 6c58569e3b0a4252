//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session repository and result file storage
//! - `http` - REST API for a presentation layer

pub mod http;
pub mod storage;

pub use storage::{FsResultStorage, InMemorySessionRepository};
