//! Update command implementation.

use super::output::render_record;
use super::Format;
use tasklog_core::RecordStore;
use tracing::debug;

/// Runs the update command and prints the updated record.
pub fn run(
    store: &RecordStore,
    number: &str,
    field: &str,
    value: &str,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = store.update(number, field, value)?;
    debug!("Updated #{} {}", record.number, field);
    println!("{}", render_record(&record, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklog_core::NewRecord;
    use tempfile::TempDir;

    #[test]
    fn update_persists_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.csv");
        let store = RecordStore::open(&path).unwrap();
        store.add(NewRecord::new("Two Sum", "Easy")).unwrap();

        run(&store, "1", "attempt_2", "true", Format::Json).unwrap();

        let reopened = RecordStore::open(&path).unwrap();
        assert_eq!(reopened.get("1").unwrap().attempts, [false, true, false]);
    }

    #[test]
    fn unknown_field_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(&dir.path().join("tasks.csv")).unwrap();
        store.add(NewRecord::new("Two Sum", "Easy")).unwrap();

        let err = run(&store, "1", "title", "x", Format::Text).unwrap_err();
        assert!(err.to_string().contains("title"));
    }
}
