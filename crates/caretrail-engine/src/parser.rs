//! Pipe-delimited timeline parser.
//!
//! The accepted format is a header line followed by rows such as
//!
//! ```text
//! | Month | Member Concern | Decision by Elyx | Reason for Decision |
//! | Jan   | Back pain      | Refer to physio  | Chronic history     |
//! ```
//!
//! There is no quoting or escaping: a `|` inside free text shifts the fields
//! of that row. Rows that split into fewer than [`MIN_FIELDS`] fields are
//! skipped and reported in [`ParseOutcome::skipped_lines`]; parsing never
//! fails.

use serde::Serialize;

use crate::record::TimelineRecord;

/// Field separator.
pub const DELIMITER: char = '|';

/// Minimum number of fields (including the leading empty one) for a row to
/// be accepted.
pub const MIN_FIELDS: usize = 4;

/// Result of parsing one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    /// Accepted rows in source order.
    pub records: Vec<TimelineRecord>,
    /// 1-based line numbers of data rows that had too few fields.
    pub skipped_lines: Vec<usize>,
}

impl ParseOutcome {
    /// Whether no rows were accepted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse the full contents of a timeline file.
pub fn parse_timeline(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    let data_lines = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        // The first non-blank line is the header, whatever it contains.
        .skip(1);

    for (line_no, line) in data_lines {
        match parse_row(line_no, line) {
            Some(record) => outcome.records.push(record),
            None => outcome.skipped_lines.push(line_no),
        }
    }

    outcome
}

fn parse_row(line_no: usize, line: &str) -> Option<TimelineRecord> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(TimelineRecord {
        id: line_no,
        month: fields[1].to_string(),
        member_concern: fields[2].to_string(),
        decision_by_elyx: fields[3].to_string(),
        reason_for_decision: fields.get(4).map(|s| (*s).to_string()),
    })
}
