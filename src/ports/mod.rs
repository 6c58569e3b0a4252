//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Assessment session persistence
//! - `ResultFileStorage` - Writing exported results to disk

mod result_file_storage;
mod session_repository;

pub use result_file_storage::{ResultFileStorage, StorageError, StoredExport};
pub use session_repository::{mutate_session, SessionMutation, SessionRepository};
