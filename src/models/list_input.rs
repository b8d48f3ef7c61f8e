// ABOUTME: Text <-> list conversions for the wizard's multi-value inputs
// Lists are always derived from text; text is rebuilt by joining for display

/// Separator a list-valued field is entered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDelimiter {
    /// One entry per line
    Newline,
    /// Comma separated, displayed as ", "
    Comma,
}

impl ListDelimiter {
    fn split_char(self) -> char {
        match self {
            Self::Newline => '\n',
            Self::Comma => ',',
        }
    }

    fn join_str(self) -> &'static str {
        match self {
            Self::Newline => "\n",
            Self::Comma => ", ",
        }
    }
}

/// Split, trim each entry and drop empty ones
pub fn parse_list(text: &str, delimiter: ListDelimiter) -> Vec<String> {
    text.split(delimiter.split_char())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Rebuild the display text for a parsed list
pub fn join_list(items: &[String], delimiter: ListDelimiter) -> String {
    items.join(delimiter.join_str())
}

/// Leading-integer parse the way a numeric text box reads its value.
///
/// Accepts optional surrounding whitespace and a sign, then reads digits
/// up to the first non-digit. Returns `None` when no digit leads the input
/// or the value does not fit in an `i32`.
pub fn parse_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}
