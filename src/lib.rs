//! Parser for TSDB block analysis dumps.
//!
//! Turns the text report (block header counters plus ranked label sections)
//! into a [`Report`] that serializes to JSON.

pub mod error;
pub mod parser;
pub mod report;
pub mod settings;
pub mod streams;

pub use error::{EntryFault, NumberError, ParseError};
pub use parser::{parse, parse_str};
pub use report::{RankedEntry, Report, ScalarField, Section};
