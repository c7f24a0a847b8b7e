pub mod lines;
pub mod sections;

use std::io::{self, BufRead};

use tracing::{debug, trace};

use crate::error::{NumberError, ParseError, Result};
use crate::report::Report;
use lines::Line;

/// Two-step pipeline over one forward cursor: classify each line, and hand
/// the cursor to the section extractor whenever a title is recognized.
pub fn parse<R: BufRead>(input: R) -> Result<Report> {
    let mut cursor = LineCursor::new(input);
    let mut report = Report::default();
    let mut ignored = 0usize;

    while let Some(line) = cursor.next_line() {
        let line = line?;
        match lines::classify(&line) {
            Line::Scalar(field, raw) => {
                lines::apply_scalar(&mut report, field, raw).map_err(|source| {
                    ParseError::MalformedScalar {
                        line: cursor.line_number(),
                        field,
                        value: raw.to_string(),
                        source,
                    }
                })?;
                debug!(field = %field, value = raw, "scalar field");
            }
            Line::Section(section) => {
                let start = cursor.line_number();
                let entries = sections::extract_entries(&mut cursor)?;
                debug!(section = %section, line = start, entries = entries.len(), "ranked section");
                report.set_section(section, entries);
            }
            Line::Blank | Line::Other => ignored += 1,
        }
    }

    trace!(lines = cursor.line_number(), ignored, "report parsed");
    Ok(report)
}

pub fn parse_str(text: &str) -> Result<Report> {
    parse(text.as_bytes())
}

/// Forward-only line reader that remembers how many lines it has handed out.
pub struct LineCursor<R> {
    lines: io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        LineCursor {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    pub fn next_line(&mut self) -> Option<io::Result<String>> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line)
    }

    /// 1-based number of the last line returned, 0 before the first read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Strict decimal `u64`: digits only, no sign, no padding.
pub fn parse_count(raw: &str) -> std::result::Result<u64, NumberError> {
    if raw.is_empty() {
        return Err(NumberError::Empty);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::InvalidDigit);
    }
    raw.parse::<u64>().map_err(|_| NumberError::OutOfRange)
}
