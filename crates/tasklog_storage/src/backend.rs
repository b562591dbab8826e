//! Storage backend trait definition.

use crate::error::StorageResult;

/// A whole-file storage backend.
///
/// Backends are **opaque byte stores** holding exactly one blob: the current
/// record file. They do not interpret what they store.
///
/// # Invariants
///
/// - `read_all` returns the bytes of the last successful `replace_all`
/// - `replace_all` is all-or-nothing: on error the previous content is
///   still what `read_all` returns
/// - Backends must be `Send + Sync` so a store can be shared across threads
///
/// # Implementors
///
/// - [`super::FileBackend`] - For persistent storage
/// - [`super::InMemoryBackend`] - For testing
pub trait StorageBackend: Send + Sync {
    /// Reads the full content.
    ///
    /// Returns `None` if nothing has been stored yet (e.g. the file does
    /// not exist).
    ///
    /// # Errors
    ///
    /// Returns an error if the content exists but cannot be read.
    fn read_all(&self) -> StorageResult<Option<Vec<u8>>>;

    /// Atomically replaces the full content with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the new content was not put in place. The
    /// previous content is then left intact.
    fn replace_all(&mut self, data: &[u8]) -> StorageResult<()>;

    /// Short human-readable description, used in log messages.
    fn describe(&self) -> String;
}
