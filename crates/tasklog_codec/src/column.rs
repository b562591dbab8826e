//! Column layout of the record file.

/// A column of the record file, in canonical write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// `number`
    Number,
    /// `title`
    Title,
    /// `difficulty`
    Difficulty,
    /// `link`
    Link,
    /// `theme`
    Theme,
    /// `notes`
    Notes,
    /// `attempt_1`
    Attempt1,
    /// `attempt_2`
    Attempt2,
    /// `attempt_3`
    Attempt3,
}

impl Column {
    /// Number of columns.
    pub const COUNT: usize = 9;

    /// All columns in canonical order.
    pub const ALL: [Column; Self::COUNT] = [
        Column::Number,
        Column::Title,
        Column::Difficulty,
        Column::Link,
        Column::Theme,
        Column::Notes,
        Column::Attempt1,
        Column::Attempt2,
        Column::Attempt3,
    ];

    /// Attempt columns, indexed by slot.
    pub const ATTEMPTS: [Column; 3] = [Column::Attempt1, Column::Attempt2, Column::Attempt3];

    /// Canonical header name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Column::Number => "number",
            Column::Title => "title",
            Column::Difficulty => "difficulty",
            Column::Link => "link",
            Column::Theme => "theme",
            Column::Notes => "notes",
            Column::Attempt1 => "attempt_1",
            Column::Attempt2 => "attempt_2",
            Column::Attempt3 => "attempt_3",
        }
    }

    /// Position in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolves a header name, accepting the legacy names
    /// `leetcode_link`, `ideas` and `solution_1..3`.
    #[must_use]
    pub fn from_header(name: &str) -> Option<Column> {
        let column = match name.trim() {
            "number" => Column::Number,
            "title" => Column::Title,
            "difficulty" => Column::Difficulty,
            "link" | "leetcode_link" => Column::Link,
            "theme" => Column::Theme,
            "notes" | "ideas" => Column::Notes,
            "attempt_1" | "solution_1" => Column::Attempt1,
            "attempt_2" | "solution_2" => Column::Attempt2,
            "attempt_3" | "solution_3" => Column::Attempt3,
            _ => return None,
        };
        Some(column)
    }
}
