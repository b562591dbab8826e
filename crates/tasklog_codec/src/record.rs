//! Record and difficulty types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of independent attempt flags carried by every record.
pub const ATTEMPT_SLOTS: usize = 3;

/// Problem difficulty.
///
/// Only the three named levels are accepted for new records. Anything else
/// found in a file is kept verbatim as [`Difficulty::Other`] and sorts last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    /// Easy.
    Easy,
    /// Medium.
    Medium,
    /// Hard.
    Hard,
    /// Unrecognized text, preserved as written.
    Other(String),
}

impl Difficulty {
    /// Parses one of the three named levels, returning `None` for anything else.
    #[must_use]
    pub fn parse_known(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Sort rank: Easy=1, Medium=2, Hard=3, anything else=4.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Other(_) => 4,
        }
    }

    /// Returns true for the three named levels.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Text written to the record file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        Self::parse_known(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<&str> for Difficulty {
    fn from(raw: &str) -> Self {
        Self::parse_known(raw).unwrap_or_else(|| Self::Other(raw.to_string()))
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One practice problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, unique within a file, compared as exact text.
    pub number: String,
    /// Display title.
    pub title: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Reference link, may be empty.
    pub link: String,
    /// Theme, trimmed.
    pub theme: String,
    /// Free-form notes, trimmed.
    pub notes: String,
    /// Completion flags for the three solution passes.
    pub attempts: [bool; ATTEMPT_SLOTS],
}

impl Record {
    /// Number of completed solution passes (0 to 3).
    #[must_use]
    pub fn progress_count(&self) -> usize {
        self.attempts.iter().filter(|done| **done).count()
    }

    /// Completed passes as a percentage of all passes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        self.progress_count() as f64 / ATTEMPT_SLOTS as f64 * 100.0
    }

    /// Returns the decimal digits of `number` without leading zeros, if it
    /// is a non-negative integer (an optional `+` is allowed).
    ///
    /// The digits are not bounded by any integer width; compare them with
    /// [`cmp_numeric`].
    #[must_use]
    pub fn numeric_number(&self) -> Option<&str> {
        let trimmed = self.number.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match digits.trim_start_matches('0') {
            "" => Some("0"),
            significant => Some(significant),
        }
    }
}

/// Stable sort by difficulty rank.
///
/// Records of equal rank keep their relative order, so appending a record and
/// sorting places it after every existing record of the same difficulty.
pub fn sort_by_difficulty(records: &mut [Record]) {
    records.sort_by_key(|r| r.difficulty.rank());
}

/// Orders two digit strings returned by [`Record::numeric_number`] by value.
#[must_use]
pub fn cmp_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Adds one to a string of decimal digits.
#[must_use]
pub fn increment_numeric(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return out.into_iter().map(char::from).collect();
        }
    }
    std::iter::once('1').chain(out.into_iter().map(char::from)).collect()
}

/// Returns true if `records` is in non-decreasing rank order.
#[must_use]
pub fn is_sorted_by_difficulty(records: &[Record]) -> bool {
    records
        .windows(2)
        .all(|w| w[0].difficulty.rank() <= w[1].difficulty.rank())
}
