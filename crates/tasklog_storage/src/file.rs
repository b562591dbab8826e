//! File-based storage backend for persistent storage.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Distinguishes the temporary files of backends opened in one process.
static NEXT_TEMP_ID: AtomicU64 = AtomicU64::new(0);

/// A file-based storage backend.
///
/// The record file is never rewritten in place. `replace_all` uses the
/// write-then-rename pattern:
/// 1. Write the new content to `.<name>.<pid>-<id>.tmp` next to the target
/// 2. Flush and (optionally) sync the temporary file
/// 3. Rename it over the target
/// 4. Sync the parent directory so the rename itself is durable
///
/// A crash at any step leaves either the old or the new file in place,
/// never a truncated one. Once the rename has happened the write counts as
/// done; a failed directory sync is logged, not returned.
///
/// Each backend gets its own temporary file, so two backends on the same
/// path never write into each other's. They still do not serialize with
/// each other: keep one store per record file in a process.
///
/// # Example
///
/// ```no_run
/// use tasklog_storage::{StorageBackend, FileBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::open(Path::new("tasks.csv")).unwrap();
/// backend.replace_all(b"number,title\n").unwrap();
/// ```
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    temp_path: PathBuf,
    sync: bool,
}

impl FileBackend {
    /// Creates a backend for the file at `path`.
    ///
    /// The file does not need to exist; it is created by the first
    /// `replace_all`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if `path` has no file name component.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let Some(name) = path.file_name() else {
            return Err(StorageError::InvalidPath {
                path: path.to_path_buf(),
            });
        };

        let id = NEXT_TEMP_ID.fetch_add(1, Ordering::Relaxed);
        let mut temp_name = OsString::from(".");
        temp_name.push(name);
        temp_name.push(format!(".{}-{id}.tmp", process::id()));

        Ok(Self {
            path: path.to_path_buf(),
            temp_path: path.with_file_name(temp_name),
            sync: true,
        })
    }

    /// Creates a backend, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the path is invalid.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Sets whether writes are synced to disk before the rename.
    #[must_use]
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Returns the path to the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path used for the temporary file during writes.
    #[must_use]
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    fn write_temp(&self, data: &[u8]) -> io::Result<()> {
        let mut file = File::create(&self.temp_path)?;
        file.write_all(data)?;
        file.flush()?;
        if self.sync {
            file.sync_all()?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    /// Syncs the parent directory so the rename survives a crash.
    #[cfg(unix)]
    fn sync_directory(&self) -> io::Result<()> {
        File::open(self.parent_dir())?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) -> io::Result<()> {
        // NTFS journals metadata; directory handles cannot be fsynced.
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read_all(&self) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn replace_all(&mut self, data: &[u8]) -> StorageResult<()> {
        let written = self
            .write_temp(data)
            .and_then(|()| fs::rename(&self.temp_path, &self.path));

        if let Err(e) = written {
            // Best effort; the target file was not touched.
            let _ = fs::remove_file(&self.temp_path);
            return Err(e.into());
        }

        // The new content is in place; only its durability is in doubt now.
        if self.sync {
            if let Err(e) = self.sync_directory() {
                warn!(path = %self.path.display(), error = %e, "directory sync failed after rename");
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(&dir.path().join("tasks.csv")).unwrap();
        assert!(backend.read_all().unwrap().is_none());
    }

    #[test]
    fn replace_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.csv");

        let mut backend = FileBackend::open(&path).unwrap();
        backend.replace_all(b"first").unwrap();
        backend.replace_all(b"second").unwrap();

        assert_eq!(backend.read_all().unwrap().unwrap(), b"second");
        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!backend.temp_path().exists());
    }

    #[test]
    fn persistence_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.csv");

        {
            let mut backend = FileBackend::open(&path).unwrap();
            backend.replace_all(b"persistent data").unwrap();
        }

        let backend = FileBackend::open(&path).unwrap();
        assert_eq!(backend.read_all().unwrap().unwrap(), b"persistent data");
    }

    #[test]
    fn failed_write_leaves_target_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.csv");

        let mut backend = FileBackend::open(&path).unwrap();
        backend.replace_all(b"original").unwrap();

        // A directory in the temp file's place makes File::create fail.
        fs::create_dir(backend.temp_path()).unwrap();

        let result = backend.replace_all(b"replacement");
        assert!(matches!(result, Err(StorageError::Io(_))));
        assert_eq!(fs::read(&path).unwrap(), b"original");
    }

    #[test]
    fn temp_file_sits_next_to_target() {
        let backend = FileBackend::open(Path::new("/data/tasks.csv")).unwrap();
        let temp = backend.temp_path();
        assert_eq!(temp.parent(), Some(Path::new("/data")));

        let name = temp.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(".tasks.csv."), "{name}");
        assert!(name.ends_with(".tmp"), "{name}");
    }

    #[test]
    fn backends_on_one_path_use_distinct_temp_files() {
        let path = Path::new("/data/tasks.csv");
        let first = FileBackend::open(path).unwrap();
        let second = FileBackend::open(path).unwrap();
        assert_ne!(first.temp_path(), second.temp_path());
    }

    #[test]
    fn concurrent_writers_never_mix_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        let contents: Vec<Vec<u8>> = (0..4u8).map(|i| vec![b'a' + i; 64 * 1024]).collect();

        let handles: Vec<_> = contents
            .iter()
            .cloned()
            .map(|data| {
                let mut backend = FileBackend::open(&path).unwrap().with_sync(false);
                std::thread::spawn(move || {
                    for _ in 0..20 {
                        backend.replace_all(&data).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stored = fs::read(&path).unwrap();
        assert!(contents.contains(&stored));
    }

    #[cfg(unix)]
    #[test]
    fn directory_sync_failure_after_rename_is_not_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let ledger = dir.path().join("ledger");
        fs::create_dir(&ledger).unwrap();
        let path = ledger.join("tasks.csv");

        let mut backend = FileBackend::open(&path).unwrap();
        backend.replace_all(b"old").unwrap();

        // Write and search only: the rename succeeds, opening the directory does not.
        fs::set_permissions(&ledger, fs::Permissions::from_mode(0o300)).unwrap();
        let result = backend.replace_all(b"new");
        fs::set_permissions(&ledger, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(result.is_ok(), "{result:?}");
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn path_without_file_name_rejected() {
        let result = FileBackend::open(Path::new("/"));
        assert!(matches!(result, Err(StorageError::InvalidPath { .. })));
    }

    #[test]
    fn create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("path").join("tasks.csv");

        let mut backend = FileBackend::open_with_create_dirs(&path).unwrap();
        backend.replace_all(b"x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unsynced_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.csv");

        let mut backend = FileBackend::open(&path).unwrap().with_sync(false);
        backend.replace_all(b"fast").unwrap();
        assert_eq!(backend.read_all().unwrap().unwrap(), b"fast");
    }
}
