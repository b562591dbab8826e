//! # Tasklog Storage
//!
//! Storage backends for the Tasklog record file.
//!
//! Backends are **opaque byte stores** holding a single blob. They know
//! nothing about rows or records; the codec owns the file format and the
//! store owns locking.
//!
//! ## Design Principles
//!
//! - One blob per backend, read and replaced whole
//! - Replacement is atomic: readers see the old or the new content, never a mix
//! - Must be `Send + Sync` for concurrent access
//!
//! ## Available Backends
//!
//! - [`FileBackend`] - Persistent storage with write-then-rename
//! - [`InMemoryBackend`] - For testing, with write fault injection
//!
//! ## Example
//!
//! ```rust
//! use tasklog_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! backend.replace_all(b"hello world").unwrap();
//! assert_eq!(backend.read_all().unwrap().unwrap(), b"hello world");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
