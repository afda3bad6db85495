//! Run stamps and report file names.
//!
//! All reports from one run share a single `YYYYMMDD_HHMMSS` stamp captured
//! when the run starts.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::options::ReportKind;

/// strftime pattern of a run stamp
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp suffix shared by every report of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunStamp(String);

impl RunStamp {
    /// Stamp for the current local time.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now().naive_local())
    }

    /// Stamp for a specific wall-clock time.
    pub fn from_datetime(at: &NaiveDateTime) -> Self {
        RunStamp(at.format(STAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RunStamp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, STAMP_FORMAT)
            .map(|at| Self::from_datetime(&at))
            .map_err(|e| format!("Invalid timestamp '{}' (expected YYYYMMDD_HHMMSS): {}", s, e))
    }
}

/// File name of a report, e.g. `os_summary_20250309_140507.csv`.
pub fn report_file_name(kind: ReportKind, stamp: &RunStamp) -> String {
    format!("{}_{}.csv", kind.file_prefix(), stamp)
}

/// Full path of a report inside `dir`.
pub fn report_path(dir: &Path, kind: ReportKind, stamp: &RunStamp) -> PathBuf {
    dir.join(report_file_name(kind, stamp))
}
