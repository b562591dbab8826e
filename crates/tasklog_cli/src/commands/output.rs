//! Rendering of records for the terminal.

use super::Format;
use serde::Serialize;
use tasklog_core::Record;

/// A record with its derived progress, as printed in JSON.
#[derive(Debug, Serialize)]
pub struct RecordView<'a> {
    /// The stored record.
    #[serde(flatten)]
    pub record: &'a Record,
    /// Completed passes (0 to 3).
    pub progress_count: usize,
    /// Completed passes as a percentage.
    pub progress_percent: f64,
}

impl<'a> RecordView<'a> {
    /// Wraps a record.
    pub fn new(record: &'a Record) -> Self {
        Self {
            record,
            progress_count: record.progress_count(),
            progress_percent: record.progress_percent(),
        }
    }
}

/// Renders a list of records.
pub fn render_list(records: &[Record], format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => {
            let views: Vec<RecordView<'_>> = records.iter().map(RecordView::new).collect();
            serde_json::to_string_pretty(&views)
        }
        Format::Text => Ok(render_table(records)),
    }
}

/// Renders a single record.
pub fn render_record(record: &Record, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => serde_json::to_string_pretty(&RecordView::new(record)),
        Format::Text => Ok(render_detail(record)),
    }
}

fn progress_bar(record: &Record) -> String {
    let marks: String = record
        .attempts
        .iter()
        .map(|done| if *done { '#' } else { '.' })
        .collect();
    format!("[{marks}] {:>3.0}%", record.progress_percent())
}

fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No problems recorded.".to_string();
    }

    let title_width = records
        .iter()
        .map(|r| r.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    let mut out = format!(
        "{:<6} {:<title_width$} {:<10} {:<11} {}\n",
        "#", "Title", "Difficulty", "Progress", "Theme"
    );
    for r in records {
        out.push_str(&format!(
            "{:<6} {:<title_width$} {:<10} {:<11} {}\n",
            r.number,
            r.title,
            r.difficulty.as_str(),
            progress_bar(r),
            r.theme
        ));
    }

    let solved = records.iter().filter(|r| r.progress_count() > 0).count();
    out.push_str(&format!("\n{} problems, {solved} started", records.len()));
    out
}

fn render_detail(record: &Record) -> String {
    let mut out = format!("#{} {}\n", record.number, record.title);
    out.push_str(&format!("  Difficulty: {}\n", record.difficulty));
    if !record.link.is_empty() {
        out.push_str(&format!("  Link:       {}\n", record.link));
    }
    if !record.theme.is_empty() {
        out.push_str(&format!("  Theme:      {}\n", record.theme));
    }
    if !record.notes.is_empty() {
        out.push_str(&format!("  Notes:      {}\n", record.notes));
    }
    out.push_str(&format!("  Progress:   {}", progress_bar(record)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklog_core::Difficulty;

    fn sample() -> Record {
        Record {
            number: "1".to_string(),
            title: "Two Sum".to_string(),
            difficulty: Difficulty::Easy,
            link: "https://leetcode.com/problems/two-sum/".to_string(),
            theme: "Hashing".to_string(),
            notes: String::new(),
            attempts: [true, false, false],
        }
    }

    #[test]
    fn json_includes_progress() {
        let text = render_record(&sample(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["number"], "1");
        assert_eq!(value["difficulty"], "Easy");
        assert_eq!(value["attempts"], serde_json::json!([true, false, false]));
        assert_eq!(value["progress_count"], 1);
        assert!((value["progress_percent"].as_f64().unwrap() - 33.33).abs() < 0.01);
    }

    #[test]
    fn json_list_is_array() {
        let text = render_list(&[sample(), sample()], Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn table_rows() {
        let text = render_list(&[sample()], Format::Text).unwrap();
        assert!(text.starts_with("#"));
        assert!(text.contains("Two Sum"));
        assert!(text.contains("[#..]  33%"));
        assert!(text.ends_with("1 problems, 1 started"));
    }

    #[test]
    fn empty_table() {
        assert_eq!(render_list(&[], Format::Text).unwrap(), "No problems recorded.");
    }

    #[test]
    fn detail_skips_empty_fields() {
        let text = render_record(&sample(), Format::Text).unwrap();
        assert!(text.contains("Theme:      Hashing"));
        assert!(!text.contains("Notes:"));
    }
}
