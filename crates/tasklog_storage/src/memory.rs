//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// An in-memory storage backend.
///
/// Clones share the same content, so a test can hand one clone to a store
/// and keep another to inspect what was written.
///
/// Writes can be made to fail with [`InMemoryBackend::fail_writes`], which
/// simulates a full disk or a crash before the rename.
///
/// # Example
///
/// ```rust
/// use tasklog_storage::{StorageBackend, InMemoryBackend};
///
/// let mut backend = InMemoryBackend::new();
/// let probe = backend.clone();
/// backend.replace_all(b"test data").unwrap();
/// assert_eq!(probe.data().unwrap(), b"test data");
/// assert_eq!(probe.write_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    data: RwLock<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend with pre-existing data.
    #[must_use]
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        *backend.shared.data.write() = Some(data.into());
        backend
    }

    /// Returns a copy of the stored content.
    #[must_use]
    pub fn data(&self) -> Option<Vec<u8>> {
        self.shared.data.read().clone()
    }

    /// Makes every subsequent `replace_all` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.shared.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.shared.writes.load(Ordering::SeqCst)
    }
}

impl StorageBackend for InMemoryBackend {
    fn read_all(&self) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.data())
    }

    fn replace_all(&mut self, data: &[u8]) -> StorageResult<()> {
        if self.shared.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected);
        }
        *self.shared.data.write() = Some(data.to_vec());
        self.shared.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let backend = InMemoryBackend::new();
        assert!(backend.read_all().unwrap().is_none());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn memory_with_data() {
        let backend = InMemoryBackend::with_data("preloaded");
        assert_eq!(backend.read_all().unwrap().unwrap(), b"preloaded");
    }

    #[test]
    fn memory_replace() {
        let mut backend = InMemoryBackend::with_data("old");
        backend.replace_all(b"new").unwrap();
        assert_eq!(backend.data().unwrap(), b"new");
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn clones_share_content() {
        let mut writer = InMemoryBackend::new();
        let reader = writer.clone();
        writer.replace_all(b"shared").unwrap();
        assert_eq!(reader.data().unwrap(), b"shared");
    }

    #[test]
    fn rejected_write_keeps_content() {
        let mut backend = InMemoryBackend::with_data("kept");
        backend.fail_writes(true);

        let result = backend.replace_all(b"lost");
        assert!(matches!(result, Err(StorageError::WriteRejected)));
        assert_eq!(backend.data().unwrap(), b"kept");
        assert_eq!(backend.write_count(), 0);

        backend.fail_writes(false);
        backend.replace_all(b"stored").unwrap();
        assert_eq!(backend.data().unwrap(), b"stored");
    }
}
