use std::fmt;

use serde::{Deserialize, Serialize};

/// One `count name` line of a ranked section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        RankedEntry {
            name: name.into(),
            count,
        }
    }
}

/// Structured form of one block analysis dump.
///
/// Keys keep the names downstream consumers already read (`BlockID`,
/// `HighestCardinalityLabels`, ...). Lists always serialize as arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    #[serde(rename = "BlockID")]
    pub block_id: String,
    pub duration: String,
    pub series: u64,
    pub label_names: u64,
    pub postings_unique: u64,
    pub postings_entries: u64,
    pub label_pairs_most_involved_in_churning: Vec<RankedEntry>,
    pub label_names_most_involved_in_churning: Vec<RankedEntry>,
    pub most_common_label_pairs: Vec<RankedEntry>,
    pub label_names_with_highest_cumulative_label_value_length: Vec<RankedEntry>,
    pub highest_cardinality_labels: Vec<RankedEntry>,
    pub highest_cardinality_metric_names: Vec<RankedEntry>,
}

/// Header lines carrying a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    BlockId,
    Duration,
    Series,
    LabelNames,
    PostingsUnique,
    PostingsEntries,
}

impl ScalarField {
    pub const ALL: [ScalarField; 6] = [
        ScalarField::BlockId,
        ScalarField::Duration,
        ScalarField::Series,
        ScalarField::LabelNames,
        ScalarField::PostingsUnique,
        ScalarField::PostingsEntries,
    ];

    /// Literal text that opens the header line, separator included.
    pub fn prefix(self) -> &'static str {
        match self {
            ScalarField::BlockId => "Block ID: ",
            ScalarField::Duration => "Duration: ",
            ScalarField::Series => "Series: ",
            ScalarField::LabelNames => "Label names: ",
            ScalarField::PostingsUnique => "Postings (unique label pairs): ",
            ScalarField::PostingsEntries => "Postings entries (total label pairs): ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScalarField::BlockId => "block id",
            ScalarField::Duration => "duration",
            ScalarField::Series => "series",
            ScalarField::LabelNames => "label names",
            ScalarField::PostingsUnique => "unique postings",
            ScalarField::PostingsEntries => "postings entries",
        }
    }

    /// Whether the raw value must be an unsigned integer.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ScalarField::BlockId | ScalarField::Duration)
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Titled blocks of ranked entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    LabelPairsMostInvolvedInChurning,
    LabelNamesMostInvolvedInChurning,
    MostCommonLabelPairs,
    LabelNamesWithHighestCumulativeLabelValueLength,
    HighestCardinalityLabels,
    HighestCardinalityMetricNames,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::LabelPairsMostInvolvedInChurning,
        Section::LabelNamesMostInvolvedInChurning,
        Section::MostCommonLabelPairs,
        Section::LabelNamesWithHighestCumulativeLabelValueLength,
        Section::HighestCardinalityLabels,
        Section::HighestCardinalityMetricNames,
    ];

    /// The exact header line that opens the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::LabelPairsMostInvolvedInChurning => "Label pairs most involved in churning:",
            Section::LabelNamesMostInvolvedInChurning => "Label names most involved in churning:",
            Section::MostCommonLabelPairs => "Most common label pairs:",
            Section::LabelNamesWithHighestCumulativeLabelValueLength => {
                "Label names with highest cumulative label value length:"
            }
            Section::HighestCardinalityLabels => "Highest cardinality labels:",
            Section::HighestCardinalityMetricNames => "Highest cardinality metric names:",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title().trim_end_matches(':'))
    }
}

impl Report {
    pub fn section(&self, section: Section) -> &[RankedEntry] {
        match section {
            Section::LabelPairsMostInvolvedInChurning => &self.label_pairs_most_involved_in_churning,
            Section::LabelNamesMostInvolvedInChurning => &self.label_names_most_involved_in_churning,
            Section::MostCommonLabelPairs => &self.most_common_label_pairs,
            Section::LabelNamesWithHighestCumulativeLabelValueLength => {
                &self.label_names_with_highest_cumulative_label_value_length
            }
            Section::HighestCardinalityLabels => &self.highest_cardinality_labels,
            Section::HighestCardinalityMetricNames => &self.highest_cardinality_metric_names,
        }
    }

    /// Replaces the list for `section`; a repeated title wins over the earlier one.
    pub fn set_section(&mut self, section: Section, entries: Vec<RankedEntry>) {
        let slot = match section {
            Section::LabelPairsMostInvolvedInChurning => &mut self.label_pairs_most_involved_in_churning,
            Section::LabelNamesMostInvolvedInChurning => &mut self.label_names_most_involved_in_churning,
            Section::MostCommonLabelPairs => &mut self.most_common_label_pairs,
            Section::LabelNamesWithHighestCumulativeLabelValueLength => {
                &mut self.label_names_with_highest_cumulative_label_value_length
            }
            Section::HighestCardinalityLabels => &mut self.highest_cardinality_labels,
            Section::HighestCardinalityMetricNames => &mut self.highest_cardinality_metric_names,
        };
        *slot = entries;
    }

    pub fn set_text(&mut self, field: ScalarField, value: &str) {
        match field {
            ScalarField::BlockId => self.block_id = value.to_string(),
            ScalarField::Duration => self.duration = value.to_string(),
            _ => {}
        }
    }

    pub fn set_counter(&mut self, field: ScalarField, value: u64) {
        match field {
            ScalarField::Series => self.series = value,
            ScalarField::LabelNames => self.label_names = value,
            ScalarField::PostingsUnique => self.postings_unique = value,
            ScalarField::PostingsEntries => self.postings_entries = value,
            _ => {}
        }
    }
}
