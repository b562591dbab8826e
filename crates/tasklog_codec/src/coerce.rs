//! Scalar coercion rules shared by the decoder and the store.
//!
//! Stored flags are strict: blank means `false`, `0`/`1` mean what they say,
//! anything else is an error. Flags typed by a caller additionally accept
//! `true`/`false` in any case. Free-text fields are trimmed.

/// Why a stored flag could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagIssue {
    /// Not an integer.
    NotNumeric,
    /// An integer other than 0 or 1.
    OutOfRange,
}

/// Reads a flag as stored in the record file.
///
/// # Errors
///
/// Returns the reason the text is not a valid stored flag.
pub fn stored_flag(raw: &str) -> Result<bool, FlagIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }
    match trimmed.parse::<i64>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        Ok(_) => Err(FlagIssue::OutOfRange),
        Err(_) => Err(FlagIssue::NotNumeric),
    }
}

/// Reads a flag supplied by a caller on update.
///
/// Accepts `0`, `1`, `true` and `false`; returns `None` for anything else,
/// including blank input.
#[must_use]
pub fn input_flag(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    match trimmed.parse::<i64>() {
        Ok(0) => Some(false),
        Ok(1) => Some(true),
        _ => None,
    }
}

/// Text written for a flag.
#[must_use]
pub const fn flag_text(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

/// Canonical form of a trimmed free-text field.
#[must_use]
pub fn text(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_flags() {
        assert_eq!(stored_flag(""), Ok(false));
        assert_eq!(stored_flag("   "), Ok(false));
        assert_eq!(stored_flag("0"), Ok(false));
        assert_eq!(stored_flag(" 1 "), Ok(true));
        assert_eq!(stored_flag("2"), Err(FlagIssue::OutOfRange));
        assert_eq!(stored_flag("-1"), Err(FlagIssue::OutOfRange));
        assert_eq!(stored_flag("yes"), Err(FlagIssue::NotNumeric));
        assert_eq!(stored_flag("true"), Err(FlagIssue::NotNumeric));
    }

    #[test]
    fn input_flags() {
        assert_eq!(input_flag("1"), Some(true));
        assert_eq!(input_flag("0"), Some(false));
        assert_eq!(input_flag("TRUE"), Some(true));
        assert_eq!(input_flag(" false "), Some(false));
        assert_eq!(input_flag(""), None);
        assert_eq!(input_flag("2"), None);
        assert_eq!(input_flag("maybe"), None);
    }

    #[test]
    fn flag_text_is_zero_or_one() {
        assert_eq!(flag_text(true), "1");
        assert_eq!(flag_text(false), "0");
    }
}
