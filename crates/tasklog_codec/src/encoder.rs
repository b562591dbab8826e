//! Record file encoder.

use crate::coerce;
use crate::column::Column;
use crate::record::Record;

/// Encode records as a complete record file, header included.
///
/// Columns are written in canonical order, flags as `0`/`1`, and
/// `theme`/`notes` trimmed. All other fields are written verbatim.
#[must_use]
pub fn encode(records: &[Record]) -> String {
    let mut encoder = RowEncoder::with_capacity(64 * (records.len() + 1));
    encoder.write_header();
    for record in records {
        encoder.write_record(record);
    }
    encoder.into_string()
}

/// Incremental row writer.
pub struct RowEncoder {
    buffer: String,
}

impl RowEncoder {
    /// Create an empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Create an encoder with the given capacity in bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Write the canonical header row.
    pub fn write_header(&mut self) {
        let names = Column::ALL.map(Column::name);
        self.write_row(&names);
    }

    /// Write one record as a row.
    pub fn write_record(&mut self, record: &Record) {
        let theme = coerce::text(&record.theme);
        let notes = coerce::text(&record.notes);
        let [a1, a2, a3] = record.attempts.map(coerce::flag_text);
        self.write_row(&[
            record.number.as_str(),
            record.title.as_str(),
            record.difficulty.as_str(),
            record.link.as_str(),
            theme.as_str(),
            notes.as_str(),
            a1,
            a2,
            a3,
        ]);
    }

    /// Consume the encoder and return the text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Get a reference to the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_row(&mut self, fields: &[&str]) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.buffer.push(',');
            }
            self.write_field(field);
        }
        self.buffer.push('\n');
    }

    fn write_field(&mut self, value: &str) {
        let needs_quoting = value.contains(&[',', '"', '\n', '\r'][..]);
        if needs_quoting {
            self.buffer.push('"');
            self.buffer.push_str(&value.replace('"', "\"\""));
            self.buffer.push('"');
        } else {
            self.buffer.push_str(value);
        }
    }
}

impl Default for RowEncoder {
    fn default() -> Self {
        Self::new()
    }
}
