//! Line parser for `KEY=VALUE` env files
//!
//! The format is deliberately minimal: one pair per line, split on the only
//! `=` of the line. There is no quoting, no escaping, no comments and no
//! whitespace trimming, so `KEY = value` yields the name `"KEY "`.

use ssm2dotenv_core::{Error, Result, FIELD_DELIMITER, LINE_SEPARATOR};

/// A parsed line, borrowing from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based line number in the input
    pub line_number: usize,
    pub name: &'a str,
    /// Right-hand side exactly as written
    pub value: &'a str,
}

/// Parse every non-empty line of `content`.
///
/// The first malformed line aborts parsing; no entries are returned in that
/// case.
pub fn parse(content: &str) -> Result<Vec<Entry<'_>>> {
    content
        .split(LINE_SEPARATOR)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

/// Parse a single line into a name/value pair
pub fn parse_line(line_number: usize, line: &str) -> Result<Entry<'_>> {
    let mut parts = line.split(FIELD_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) if !name.is_empty() => Ok(Entry {
            line_number,
            name,
            value,
        }),
        _ => Err(Error::malformed_line(line_number, line)),
    }
}
