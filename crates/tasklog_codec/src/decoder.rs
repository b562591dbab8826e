//! Record file decoder.

use crate::coerce::{self, FlagIssue};
use crate::column::Column;
use crate::error::{CodecError, CodecResult};
use crate::record::{Difficulty, Record, ATTEMPT_SLOTS};
use std::iter::Peekable;
use std::str::Chars;

/// Decode a record file from raw bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidUtf8`] for non-UTF-8 input, otherwise see
/// [`decode_str`].
pub fn decode(bytes: &[u8]) -> CodecResult<Vec<Record>> {
    let text = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
    decode_str(text)
}

/// Decode a record file from text.
///
/// The first non-blank row is the header; columns are matched by name.
/// Records are returned in file order. Input with no header decodes to an
/// empty sequence.
///
/// # Errors
///
/// Fails on the first malformed row; no partial result is returned.
pub fn decode_str(text: &str) -> CodecResult<Vec<Record>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = RowReader::new(text).filter(|row| !matches!(row, Ok(r) if r.is_blank()));

    let Some(header) = rows.next().transpose()? else {
        return Ok(Vec::new());
    };
    let layout = HeaderLayout::from_row(&header)?;

    rows.map(|row| layout.record(&row?)).collect()
}

/// One physical row of delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Line on which the row starts (1-based).
    pub line: usize,
    /// Unquoted field values.
    pub fields: Vec<String>,
}

impl RawRow {
    fn is_blank(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].trim().is_empty()
    }
}

/// Splits comma-separated text into rows.
///
/// Fields may be wrapped in double quotes, in which case they can contain
/// commas, line breaks and doubled quotes. Rows end at `\n` or `\r\n`.
pub struct RowReader<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> RowReader<'a> {
    /// Create a reader over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
        }
    }

    fn read_row(&mut self) -> CodecResult<RawRow> {
        let line = self.line;
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut quoted = false;

        loop {
            let Some(c) = self.chars.next() else {
                if in_quotes {
                    return Err(CodecError::UnterminatedQuote { line });
                }
                fields.push(field);
                return Ok(RawRow { line, fields });
            };

            if in_quotes {
                match c {
                    '"' if self.chars.peek() == Some(&'"') => {
                        self.chars.next();
                        field.push('"');
                    }
                    '"' => in_quotes = false,
                    '\n' => {
                        self.line += 1;
                        field.push(c);
                    }
                    _ => field.push(c),
                }
                continue;
            }

            match c {
                '"' if field.is_empty() && !quoted => {
                    in_quotes = true;
                    quoted = true;
                }
                ',' => {
                    fields.push(std::mem::take(&mut field));
                    quoted = false;
                }
                '\r' if self.chars.peek() == Some(&'\n') => {}
                '\n' => {
                    self.line += 1;
                    fields.push(field);
                    return Ok(RawRow { line, fields });
                }
                _ => field.push(c),
            }
        }
    }
}

impl Iterator for RowReader<'_> {
    type Item = CodecResult<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chars.peek()?;
        let row = self.read_row();
        if row.is_err() {
            // An unterminated quote consumes the rest of the input.
            while self.chars.next().is_some() {}
        }
        Some(row)
    }
}

/// Field positions resolved from a header row.
struct HeaderLayout {
    positions: [usize; Column::COUNT],
    width: usize,
}

impl HeaderLayout {
    fn from_row(header: &RawRow) -> CodecResult<Self> {
        let mut positions = [None; Column::COUNT];
        for (i, name) in header.fields.iter().enumerate() {
            // Every column must map to a record field, or a rewrite would drop it.
            let column = Column::from_header(name).ok_or_else(|| CodecError::UnknownColumn {
                column: name.trim().to_string(),
            })?;
            let slot = &mut positions[column.index()];
            if slot.is_some() {
                return Err(CodecError::DuplicateColumn {
                    column: column.name(),
                });
            }
            *slot = Some(i);
        }

        let mut resolved = [0; Column::COUNT];
        for column in Column::ALL {
            resolved[column.index()] = positions[column.index()].ok_or(
                CodecError::MissingColumn {
                    column: column.name(),
                },
            )?;
        }

        Ok(Self {
            positions: resolved,
            width: header.fields.len(),
        })
    }

    fn field<'r>(&self, row: &'r RawRow, column: Column) -> &'r str {
        &row.fields[self.positions[column.index()]]
    }

    fn record(&self, row: &RawRow) -> CodecResult<Record> {
        if row.fields.len() != self.width {
            return Err(CodecError::FieldCount {
                line: row.line,
                expected: self.width,
                actual: row.fields.len(),
            });
        }

        let mut attempts = [false; ATTEMPT_SLOTS];
        for (slot, column) in Column::ATTEMPTS.iter().enumerate() {
            attempts[slot] = self.flag(row, *column)?;
        }

        Ok(Record {
            number: self.field(row, Column::Number).to_string(),
            title: self.field(row, Column::Title).to_string(),
            difficulty: Difficulty::from(self.field(row, Column::Difficulty)),
            link: self.field(row, Column::Link).to_string(),
            theme: coerce::text(self.field(row, Column::Theme)),
            notes: coerce::text(self.field(row, Column::Notes)),
            attempts,
        })
    }

    fn flag(&self, row: &RawRow, column: Column) -> CodecResult<bool> {
        let raw = self.field(row, column);
        coerce::stored_flag(raw).map_err(|issue| {
            let value = raw.to_string();
            match issue {
                FlagIssue::NotNumeric => CodecError::InvalidFlag {
                    line: row.line,
                    column: column.name(),
                    value,
                },
                FlagIssue::OutOfRange => CodecError::FlagOutOfRange {
                    line: row.line,
                    column: column.name(),
                    value,
                },
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "number,title,difficulty,link,theme,notes,attempt_1,attempt_2,attempt_3\n";

    fn rows(text: &str) -> Vec<Vec<String>> {
        RowReader::new(text)
            .map(|r| r.unwrap().fields)
            .collect()
    }

    #[test]
    fn split_simple_rows() {
        assert_eq!(rows("a,b,c\nd,e,f\n"), vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn split_quoted_fields() {
        assert_eq!(
            rows("\"hello, world\",\"say \"\"hi\"\"\"\n"),
            vec![vec!["hello, world", "say \"hi\""]]
        );
    }

    #[test]
    fn quoted_field_spans_lines() {
        let mut reader = RowReader::new("a,\"x\ny\"\nb,c\n");
        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.line, 1);
        assert_eq!(first.fields, vec!["a", "x\ny"]);
        let second = reader.next().unwrap().unwrap();
        assert_eq!(second.line, 3);
        assert!(reader.next().is_none());
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(rows("a,b\r\nc,d\r\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert_eq!(decode_str("").unwrap(), Vec::new());
        assert_eq!(decode_str("\n\n").unwrap(), Vec::new());
        assert_eq!(decode_str(HEADER).unwrap(), Vec::new());
    }

    #[test]
    fn decode_coerces_fields() {
        let text = format!("{HEADER}7,Two Sum,Easy,https://x,  arrays  , use a map ,1,,0\n");
        let records = decode_str(&text).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.number, "7");
        assert_eq!(r.title, "Two Sum");
        assert_eq!(r.difficulty, Difficulty::Easy);
        assert_eq!(r.link, "https://x");
        assert_eq!(r.theme, "arrays");
        assert_eq!(r.notes, "use a map");
        assert_eq!(r.attempts, [true, false, false]);
    }

    #[test]
    fn decode_keeps_file_order() {
        let text = format!("{HEADER}1,A,Hard,,,,0,0,0\n2,B,Easy,,,,0,0,0\n");
        let numbers: Vec<String> = decode_str(&text)
            .unwrap()
            .into_iter()
            .map(|r| r.number)
            .collect();
        assert_eq!(numbers, ["1", "2"]);
    }

    #[test]
    fn columns_matched_by_name() {
        let text = "title,number,attempt_3,attempt_2,attempt_1,notes,theme,link,difficulty\n\
                    Jump Game,4,1,0,0,n,t,l,Medium\n";
        let r = &decode_str(text).unwrap()[0];
        assert_eq!(r.number, "4");
        assert_eq!(r.title, "Jump Game");
        assert_eq!(r.attempts, [false, false, true]);
        assert_eq!(r.difficulty, Difficulty::Medium);
    }

    #[test]
    fn legacy_header_is_accepted() {
        let text = "number,title,difficulty,leetcode_link,theme,ideas,solution_1,solution_2,solution_3\n\
                    1,Two Sum,Easy,https://leetcode.com/problems/two-sum, Hash , map ,1,1,0\n";
        let r = &decode_str(text).unwrap()[0];
        assert_eq!(r.link, "https://leetcode.com/problems/two-sum");
        assert_eq!(r.notes, "map");
        assert_eq!(r.attempts, [true, true, false]);
    }

    #[test]
    fn bom_is_ignored() {
        let text = format!("\u{feff}{HEADER}1,A,Easy,,,,0,0,0\n");
        assert_eq!(decode_str(&text).unwrap().len(), 1);
    }

    #[test]
    fn missing_column_rejected() {
        let err = decode_str("number,title,difficulty\n1,A,Easy\n").unwrap_err();
        assert_eq!(err, CodecError::MissingColumn { column: "link" });
    }

    #[test]
    fn unknown_column_rejected() {
        let text = "number,title,difficulty,link,theme,notes,attempt_1,attempt_2,attempt_3,rating\n\
                    1,A,Easy,,,,0,0,0,5\n";
        assert_eq!(
            decode_str(text).unwrap_err(),
            CodecError::UnknownColumn {
                column: "rating".to_string()
            }
        );
    }

    #[test]
    fn trailing_empty_header_column_rejected() {
        let text = HEADER.replace('\n', ",\n");
        assert!(matches!(
            decode_str(&text),
            Err(CodecError::UnknownColumn { ref column }) if column.is_empty()
        ));
    }

    #[test]
    fn column_and_its_legacy_alias_rejected() {
        let text = "number,title,difficulty,link,theme,notes,ideas,attempt_1,attempt_2,attempt_3\n";
        assert_eq!(
            decode_str(text).unwrap_err(),
            CodecError::DuplicateColumn { column: "notes" }
        );
    }

    #[test]
    fn short_row_rejected() {
        let text = format!("{HEADER}1,A,Easy,,,,0,0,0\n2,B,Easy\n");
        let err = decode_str(&text).unwrap_err();
        assert_eq!(
            err,
            CodecError::FieldCount {
                line: 3,
                expected: 9,
                actual: 3
            }
        );
    }

    #[test]
    fn non_numeric_flag_rejected() {
        let text = format!("{HEADER}1,A,Easy,,,,0,yes,0\n");
        let err = decode_str(&text).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidFlag {
                line: 2,
                column: "attempt_2",
                value: "yes".to_string()
            }
        );
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn out_of_range_flag_rejected() {
        let text = format!("{HEADER}1,A,Easy,,,,0,0,5\n");
        assert!(matches!(
            decode_str(&text),
            Err(CodecError::FlagOutOfRange { column: "attempt_3", .. })
        ));
    }

    #[test]
    fn unterminated_quote_rejected() {
        let text = format!("{HEADER}1,\"A,Easy,,,,0,0,0\n");
        assert_eq!(
            decode_str(&text).unwrap_err(),
            CodecError::UnterminatedQuote { line: 2 }
        );
    }

    #[test]
    fn invalid_utf8_rejected() {
        assert_eq!(decode(&[0xff, 0xfe, b'a']).unwrap_err(), CodecError::InvalidUtf8);
    }

    #[test]
    fn unknown_difficulty_kept_verbatim() {
        let text = format!("{HEADER}1,A,Extreme,,,,0,0,0\n");
        let r = &decode_str(&text).unwrap()[0];
        assert_eq!(r.difficulty, Difficulty::Other("Extreme".to_string()));
    }
}
