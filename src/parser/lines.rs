use crate::error::NumberError;
use crate::report::{Report, ScalarField, Section};

use super::parse_count;

/// Semantic role of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Header with its raw value (text after the prefix).
    Scalar(ScalarField, &'a str),
    /// Title opening a ranked section.
    Section(Section),
    Blank,
    Other,
}

/// Dispatch tables, scanned top to bottom; first match wins.
const SCALAR_PREFIXES: [ScalarField; 6] = ScalarField::ALL;
const SECTION_TITLES: [Section; 6] = Section::ALL;

pub fn classify(line: &str) -> Line<'_> {
    for field in SCALAR_PREFIXES {
        if let Some(raw) = line.strip_prefix(field.prefix()) {
            return Line::Scalar(field, raw);
        }
    }

    for section in SECTION_TITLES {
        if line == section.title() {
            return Line::Section(section);
        }
    }

    if line.trim().is_empty() {
        Line::Blank
    } else {
        Line::Other
    }
}

/// Stores a header value, parsing it first when the field is a counter.
pub fn apply_scalar(report: &mut Report, field: ScalarField, raw: &str) -> Result<(), NumberError> {
    if field.is_numeric() {
        report.set_counter(field, parse_count(raw)?);
    } else {
        report.set_text(field, raw);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_prefixes() {
        assert_eq!(classify("Block ID: 01ABCD"), Line::Scalar(ScalarField::BlockId, "01ABCD"));
        assert_eq!(classify("Duration: 2h0m0s"), Line::Scalar(ScalarField::Duration, "2h0m0s"));
        assert_eq!(classify("Series: 42"), Line::Scalar(ScalarField::Series, "42"));
        assert_eq!(classify("Label names: 7"), Line::Scalar(ScalarField::LabelNames, "7"));
        assert_eq!(
            classify("Postings (unique label pairs): 50"),
            Line::Scalar(ScalarField::PostingsUnique, "50")
        );
        assert_eq!(
            classify("Postings entries (total label pairs): 200"),
            Line::Scalar(ScalarField::PostingsEntries, "200")
        );
    }

    #[test]
    fn section_titles() {
        for section in Section::ALL {
            assert_eq!(classify(section.title()), Line::Section(section));
        }
    }

    #[test]
    fn titles_match_exactly() {
        assert_eq!(classify("Most common label pairs: "), Line::Other);
        assert_eq!(classify("most common label pairs:"), Line::Other);
        assert_eq!(classify(" Highest cardinality labels:"), Line::Other);
    }

    #[test]
    fn prefix_needs_separator() {
        assert_eq!(classify("Series:42"), Line::Other);
        assert_eq!(classify("Series: "), Line::Scalar(ScalarField::Series, ""));
    }

    #[test]
    fn blank_and_other() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify(" \t "), Line::Blank);
        assert_eq!(classify("Block analysis"), Line::Other);
    }

    #[test]
    fn apply_counter_and_text() {
        let mut report = Report::default();
        apply_scalar(&mut report, ScalarField::PostingsEntries, "900").unwrap();
        apply_scalar(&mut report, ScalarField::Duration, "1h59m59.999s").unwrap();
        assert_eq!(report.postings_entries, 900);
        assert_eq!(report.duration, "1h59m59.999s");
    }

    #[test]
    fn apply_rejects_bad_counter() {
        let mut report = Report::default();
        assert_eq!(
            apply_scalar(&mut report, ScalarField::Series, "1.5"),
            Err(NumberError::InvalidDigit)
        );
        assert_eq!(report.series, 0);
    }
}
