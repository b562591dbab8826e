//! The record store.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::field::{Field, NewRecord};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::Path;
use tasklog_codec::{
    cmp_numeric, decode, encode, increment_numeric, is_sorted_by_difficulty, sort_by_difficulty,
    Record,
};
use tasklog_storage::{FileBackend, StorageBackend};
use tracing::{debug, info, warn};

/// Serialized, atomic access to a record file.
///
/// Every operation runs a full cycle under one lock:
///
/// ```text
/// lock -> read file -> decode -> sort -> mutate -> encode -> atomic replace -> unlock
/// ```
///
/// No record is cached between calls; the file is the only source of truth.
/// A failed write leaves the file exactly as it was.
///
/// The store is `Send + Sync`; share it with `Arc<RecordStore>`. The lock
/// belongs to the instance, so keep one store per record file in a process.
///
/// # Example
///
/// ```rust
/// use tasklog_core::{NewRecord, RecordStore};
/// use tasklog_storage::InMemoryBackend;
///
/// let store = RecordStore::with_backend(Box::new(InMemoryBackend::new()));
/// let created = store.add(NewRecord::new("Two Sum", "Easy")).unwrap();
/// assert_eq!(created.number, "1");
///
/// let updated = store.update("1", "attempt_1", "1").unwrap();
/// assert_eq!(updated.progress_count(), 1);
/// ```
pub struct RecordStore {
    backend: Mutex<Box<dyn StorageBackend>>,
    location: String,
}

impl RecordStore {
    /// Opens a store over the record file at `path` with default settings.
    ///
    /// The file does not have to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the path cannot name a file.
    pub fn open(path: &Path) -> CoreResult<Self> {
        Self::open_with_config(path, Config::default())
    }

    /// Opens a store over the record file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the path is invalid or its parent
    /// directories cannot be created.
    pub fn open_with_config(path: &Path, config: Config) -> CoreResult<Self> {
        let backend = if config.create_parent_dirs {
            FileBackend::open_with_create_dirs(path)?
        } else {
            FileBackend::open(path)?
        };
        Ok(Self::with_backend(Box::new(
            backend.with_sync(config.sync_on_write),
        )))
    }

    /// Creates a store over an arbitrary backend.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        let location = backend.describe();
        Self {
            backend: Mutex::new(backend),
            location,
        }
    }

    /// Returns a description of where records are stored.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns all records sorted by difficulty. Never writes.
    ///
    /// A missing or empty file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the file cannot be read and `Decode`
    /// if it is malformed.
    pub fn list(&self) -> CoreResult<Vec<Record>> {
        let backend = self.backend.lock();
        let records = load(&**backend)?;
        debug!(store = %self.location, count = records.len(), "listed records");
        Ok(records)
    }

    /// Returns the record with the given number.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record matches, or a load error.
    pub fn get(&self, number: &str) -> CoreResult<Record> {
        let backend = self.backend.lock();
        load(&**backend)?
            .into_iter()
            .find(|r| r.number == number)
            .ok_or_else(|| CoreError::not_found(number))
    }

    /// Replaces one field of the record with the given number.
    ///
    /// `field` is one of `theme`, `notes`, `attempt_1`, `attempt_2`,
    /// `attempt_3`. Attempt values accept `0`, `1`, `true` and `false`.
    /// Text values are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` or `InvalidValue` for bad input (checked before
    /// the file is touched), `NotFound` if no record matches, or a
    /// load/save error.
    pub fn update(&self, number: &str, field: &str, value: &str) -> CoreResult<Record> {
        let change = field.parse::<Field>()?.change(value)?;

        let mut backend = self.backend.lock();
        let mut records = load(&**backend)?;

        let record = records
            .iter_mut()
            .find(|r| r.number == number)
            .ok_or_else(|| CoreError::not_found(number))?;
        change.apply(record);
        let updated = record.clone();

        sort_by_difficulty(&mut records);
        save(&mut **backend, &records)?;

        info!(store = %self.location, number, field, "updated record");
        Ok(updated)
    }

    /// Appends a new record and returns it with its assigned number.
    ///
    /// The number is one greater than the largest numeric number in the
    /// file; non-numeric numbers are ignored. The record lands after every
    /// existing record of the same difficulty.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank title or unknown difficulty (checked
    /// before the file is touched), or a load/save error.
    pub fn add(&self, new: NewRecord) -> CoreResult<Record> {
        // Validate with a placeholder number so bad input never takes the lock.
        let mut record = new.into_record(String::new())?;

        let mut backend = self.backend.lock();
        let mut records = load(&**backend)?;

        record.number = next_number(&records);
        records.push(record.clone());

        sort_by_difficulty(&mut records);
        save(&mut **backend, &records)?;

        info!(
            store = %self.location,
            number = %record.number,
            title = %record.title,
            "added record"
        );
        Ok(record)
    }

    /// Removes the first record with the given number and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record matches, or a load/save error.
    pub fn delete(&self, number: &str) -> CoreResult<Record> {
        let mut backend = self.backend.lock();
        let mut records = load(&**backend)?;

        let index = records
            .iter()
            .position(|r| r.number == number)
            .ok_or_else(|| CoreError::not_found(number))?;
        let removed = records.remove(index);

        save(&mut **backend, &records)?;

        info!(store = %self.location, number, title = %removed.title, "deleted record");
        Ok(removed)
    }
}

/// Computes the number for a new record: the largest numeric number plus
/// one, or `"1"` if there is none.
///
/// Numbers are compared as decimal digit strings, so there is no upper bound.
#[must_use]
pub fn next_number(records: &[Record]) -> String {
    let max = records
        .iter()
        .filter_map(Record::numeric_number)
        .max_by(|a, b| cmp_numeric(a, b))
        .unwrap_or("0");
    increment_numeric(max)
}

fn load(backend: &dyn StorageBackend) -> CoreResult<Vec<Record>> {
    let Some(bytes) = backend.read_all()? else {
        return Ok(Vec::new());
    };
    let mut records = decode(&bytes)?;
    sort_by_difficulty(&mut records);
    Ok(records)
}

fn save(backend: &mut dyn StorageBackend, records: &[Record]) -> CoreResult<()> {
    debug_assert!(is_sorted_by_difficulty(records));
    warn_on_duplicates(records);

    let text = encode(records);
    if let Err(e) = backend.replace_all(text.as_bytes()) {
        warn!(store = %backend.describe(), error = %e, "write failed, file left unchanged");
        return Err(e.into());
    }
    debug!(store = %backend.describe(), count = records.len(), bytes = text.len(), "saved records");
    Ok(())
}

/// Duplicates can only come from hand edits; the store never creates them.
fn warn_on_duplicates(records: &[Record]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.number.as_str()) {
            warn!(number = %record.number, "duplicate record number in file");
        }
    }
}
