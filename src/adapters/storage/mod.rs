//! Storage Adapters
//!
//! Implementations of the storage ports.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRepository** - Keeps assessment sessions in memory
//! - **FsResultStorage** - Writes exported results to disk
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FsResultStorage, InMemorySessionRepository};
//!
//! let sessions = InMemorySessionRepository::new();
//! let exports = FsResultStorage::new("./exports");
//! ```

mod fs_result_storage;
mod in_memory_session_repository;

pub use fs_result_storage::FsResultStorage;
pub use in_memory_session_repository::InMemorySessionRepository;
