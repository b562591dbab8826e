//! List and show commands.

use super::output::{render_list, render_record};
use super::Format;
use tasklog_core::RecordStore;

/// Runs the list command.
pub fn run(store: &RecordStore, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let records = store.list()?;
    println!("{}", render_list(&records, format)?);
    Ok(())
}

/// Runs the show command.
pub fn show(store: &RecordStore, number: &str, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let record = store.get(number)?;
    println!("{}", render_record(&record, format)?);
    Ok(())
}
