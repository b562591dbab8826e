//! Mutable fields and validated inputs.

use crate::error::{CoreError, CoreResult};
use std::str::FromStr;
use tasklog_codec::{coerce, Column, Difficulty, Record, ATTEMPT_SLOTS};

/// One of the three attempt flags of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptSlot {
    /// `attempt_1`
    First,
    /// `attempt_2`
    Second,
    /// `attempt_3`
    Third,
}

impl AttemptSlot {
    /// All slots in column order.
    pub const ALL: [AttemptSlot; ATTEMPT_SLOTS] =
        [AttemptSlot::First, AttemptSlot::Second, AttemptSlot::Third];

    /// Position in `Record::attempts`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            AttemptSlot::First => 0,
            AttemptSlot::Second => 1,
            AttemptSlot::Third => 2,
        }
    }

    /// Column holding this flag.
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            AttemptSlot::First => Column::Attempt1,
            AttemptSlot::Second => Column::Attempt2,
            AttemptSlot::Third => Column::Attempt3,
        }
    }
}

/// A field that `update` may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `theme`
    Theme,
    /// `notes`
    Notes,
    /// `attempt_1..3`
    Attempt(AttemptSlot),
}

impl Field {
    /// Canonical field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Theme => Column::Theme.name(),
            Field::Notes => Column::Notes.name(),
            Field::Attempt(slot) => slot.column().name(),
        }
    }

    /// Validates `value` for this field and produces the change to apply.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if an attempt value is not `0`, `1`, `true`
    /// or `false`.
    pub fn change(self, value: &str) -> CoreResult<Change> {
        match self {
            Field::Theme => Ok(Change::Theme(coerce::text(value))),
            Field::Notes => Ok(Change::Notes(coerce::text(value))),
            Field::Attempt(slot) => coerce::input_flag(value)
                .map(|done| Change::Attempt(slot, done))
                .ok_or_else(|| CoreError::invalid_value(self.name(), value)),
        }
    }
}

impl FromStr for Field {
    type Err = CoreError;

    /// Parses a field name; the legacy names `ideas` and `solution_1..3`
    /// are accepted. Read-only columns are rejected like unknown ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Column::from_header(s) {
            Some(Column::Theme) => Ok(Field::Theme),
            Some(Column::Notes) => Ok(Field::Notes),
            Some(Column::Attempt1) => Ok(Field::Attempt(AttemptSlot::First)),
            Some(Column::Attempt2) => Ok(Field::Attempt(AttemptSlot::Second)),
            Some(Column::Attempt3) => Ok(Field::Attempt(AttemptSlot::Third)),
            _ => Err(CoreError::invalid_field(s)),
        }
    }
}

/// A validated single-field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// New theme, trimmed.
    Theme(String),
    /// New notes, trimmed.
    Notes(String),
    /// New value of one attempt flag.
    Attempt(AttemptSlot, bool),
}

impl Change {
    /// Applies the change to `record`.
    pub fn apply(self, record: &mut Record) {
        match self {
            Change::Theme(theme) => record.theme = theme,
            Change::Notes(notes) => record.notes = notes,
            Change::Attempt(slot, done) => record.attempts[slot.index()] = done,
        }
    }
}

/// Input for creating a record. The store assigns the number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    /// Title, required.
    pub title: String,
    /// One of `Easy`, `Medium`, `Hard`.
    pub difficulty: String,
    /// Reference link.
    pub link: String,
    /// Theme.
    pub theme: String,
    /// Notes.
    pub notes: String,
}

impl NewRecord {
    /// Creates an input with the required fields.
    pub fn new(title: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            difficulty: difficulty.into(),
            ..Self::default()
        }
    }

    /// Sets the link.
    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Sets the theme.
    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Trims every field and checks title and difficulty, producing a
    /// record with all attempt flags clear.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the title is blank or the difficulty is not
    /// one of the three named levels.
    pub fn into_record(self, number: String) -> CoreResult<Record> {
        let title = coerce::text(&self.title);
        if title.is_empty() {
            return Err(CoreError::validation("title is required"));
        }

        let difficulty_text = coerce::text(&self.difficulty);
        let difficulty = Difficulty::parse_known(&difficulty_text).ok_or_else(|| {
            CoreError::validation(format!(
                "difficulty must be Easy, Medium or Hard, got {difficulty_text:?}"
            ))
        })?;

        Ok(Record {
            number,
            title,
            difficulty,
            link: coerce::text(&self.link),
            theme: coerce::text(&self.theme),
            notes: coerce::text(&self.notes),
            attempts: [false; ATTEMPT_SLOTS],
        })
    }
}
