//! # Tasklog Codec
//!
//! Conversion between the flat record file and [`Record`] values.
//!
//! The record file is comma-separated text with a required header row:
//!
//! ```text
//! number,title,difficulty,link,theme,notes,attempt_1,attempt_2,attempt_3
//! 1,Two Sum,Easy,https://leetcode.com/problems/two-sum/,Hashing,,1,0,0
//! ```
//!
//! ## Coercion Rules
//!
//! - `theme` and `notes` are trimmed on decode and on encode
//! - Attempt flags are `0`/`1`; blank reads as `0`
//! - A non-numeric or out-of-range flag rejects the whole file
//! - Unknown difficulties are kept verbatim and sort last
//! - The header must name every column exactly once and nothing else
//!
//! The codec is pure: it never touches the file system and keeps no state
//! between calls.
//!
//! ## Usage
//!
//! ```
//! use tasklog_codec::{decode, encode, Difficulty, Record};
//!
//! let record = Record {
//!     number: "1".to_string(),
//!     title: "Two Sum".to_string(),
//!     difficulty: Difficulty::Easy,
//!     link: String::new(),
//!     theme: "Hashing".to_string(),
//!     notes: String::new(),
//!     attempts: [true, false, false],
//! };
//!
//! let text = encode(&[record.clone()]);
//! let decoded = decode(text.as_bytes()).unwrap();
//! assert_eq!(decoded, vec![record]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod coerce;
mod column;
mod decoder;
mod encoder;
mod error;
mod record;

pub use column::Column;
pub use decoder::{decode, decode_str, RawRow, RowReader};
pub use encoder::{encode, RowEncoder};
pub use error::{CodecError, CodecResult};
pub use record::{
    cmp_numeric, increment_numeric, is_sorted_by_difficulty, sort_by_difficulty, Difficulty,
    Record, ATTEMPT_SLOTS,
};
