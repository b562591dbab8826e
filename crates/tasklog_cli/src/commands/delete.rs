//! Delete command implementation.

use super::output::render_record;
use super::Format;
use tasklog_core::RecordStore;
use tracing::debug;

/// Runs the delete command and prints the removed record.
pub fn run(store: &RecordStore, number: &str, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let record = store.delete(number)?;
    debug!("Deleted #{} {:?}", record.number, record.title);
    println!("{}", render_record(&record, format)?);
    Ok(())
}
