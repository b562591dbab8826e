//! Add command implementation.

use super::output::render_record;
use super::Format;
use tasklog_core::{NewRecord, RecordStore};
use tracing::debug;

/// Runs the add command and prints the created record.
pub fn run(
    store: &RecordStore,
    new: NewRecord,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = store.add(new)?;
    debug!("Added #{} {:?}", record.number, record.title);
    println!("{}", render_record(&record, format)?);
    Ok(())
}
