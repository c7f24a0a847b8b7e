use std::io::BufRead;

use crate::error::{EntryFault, ParseError, Result};
use crate::report::RankedEntry;

use super::{parse_count, LineCursor};

/// Consume `count name` lines until a blank line (consumed) or end of input.
///
/// Any malformed line fails the whole section; nothing read so far is kept.
pub fn extract_entries<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Vec<RankedEntry>> {
    let mut entries = Vec::new();

    while let Some(line) = cursor.next_line() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        let entry = parse_entry(&line).map_err(|fault| ParseError::MalformedEntry {
            line: cursor.line_number(),
            text: line.clone(),
            fault,
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Split on the single separating space: exactly two parts, count first.
pub fn parse_entry(line: &str) -> std::result::Result<RankedEntry, EntryFault> {
    let parts: Vec<&str> = line.split(' ').collect();
    let [count, name] = parts.as_slice() else {
        return Err(EntryFault::FieldCount(parts.len()));
    };
    let count = parse_count(count).map_err(EntryFault::Count)?;
    Ok(RankedEntry::new(*name, count))
}
