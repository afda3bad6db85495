//! Column summarizer: one column in, one sorted count table out.
//!
//! The same routine backs all three reports; only the [`NullPolicy`] and the
//! header differ.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize::{is_null_like, normalize, UNKNOWN_LABEL};
use crate::options::{NullPolicy, ReportKind};

/// Header of the count column in every summary.
pub const COUNT_HEADER: &str = "Count";

/// One row of a summary: a distinct label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub label: String,
    pub count: u64,
}

/// Sorted frequency table for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Header of the label column ("Operating System", "Hostname", ...)
    pub label_header: String,
    /// Entries in ascending ordinal label order, labels unique
    pub entries: Vec<SummaryEntry>,
    /// Input values that were null-like (replaced or dropped)
    pub null_count: u64,
}

impl SummaryTable {
    /// Header-only table.
    pub fn empty(label_header: impl Into<String>) -> Self {
        Self {
            label_header: label_header.into(),
            entries: Vec::new(),
            null_count: 0,
        }
    }

    /// The two header cells, label first.
    pub fn headers(&self) -> [&str; 2] {
        [self.label_header.as_str(), COUNT_HEADER]
    }

    /// Number of distinct labels.
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a label, if present.
    pub fn count_of(&self, label: &str) -> Option<u64> {
        self.entries
            .binary_search_by(|e| e.label.as_str().cmp(label))
            .ok()
            .map(|i| self.entries[i].count)
    }
}

/// Summarize raw column values under a null-handling policy.
///
/// Values are trimmed, null-like values are replaced with `"Unknown"` or
/// dropped, and the remaining labels are counted. Labels are compared
/// byte-wise with no case folding, so `"Linux"` sorts before `"linux"`.
pub fn summarize_column<I, S>(
    values: I,
    policy: NullPolicy,
    label_header: impl Into<String>,
) -> SummaryTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut null_count = 0;

    for raw in values {
        let value = normalize(raw.as_ref());
        let label = if is_null_like(value) {
            null_count += 1;
            match policy {
                NullPolicy::ReplaceWithUnknown => UNKNOWN_LABEL,
                NullPolicy::Drop => continue,
            }
        } else {
            value
        };
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }

    SummaryTable {
        label_header: label_header.into(),
        entries: counts
            .into_iter()
            .map(|(label, count)| SummaryEntry { label, count })
            .collect(),
        null_count,
    }
}

/// Summarize a column for one of the standard reports.
pub fn summarize_report<I, S>(kind: ReportKind, values: I) -> SummaryTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    summarize_column(values, kind.null_policy(), kind.label_header())
}
