//! Input options for summarizing inventory files.
//!
//! This module contains the configuration types that control which columns
//! are read, how null-like values are treated, and where reports are written.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How null-like values are handled before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullPolicy {
    /// Count every null-like value under the `"Unknown"` label
    ReplaceWithUnknown,
    /// Exclude null-like values from the counts entirely
    Drop,
}

/// The three reports produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    OperatingSystem,
    Hostname,
    Vulnerability,
}

impl ReportKind {
    /// All report kinds, in the order a run produces them.
    pub const ALL: [ReportKind; 3] = [
        ReportKind::OperatingSystem,
        ReportKind::Hostname,
        ReportKind::Vulnerability,
    ];

    /// Null-handling policy for this report's column.
    ///
    /// A missing operating system is still worth reporting, so it becomes
    /// `"Unknown"`. Records without a hostname or vulnerability contribute
    /// nothing to those reports.
    pub fn null_policy(self) -> NullPolicy {
        match self {
            ReportKind::OperatingSystem => NullPolicy::ReplaceWithUnknown,
            ReportKind::Hostname | ReportKind::Vulnerability => NullPolicy::Drop,
        }
    }

    /// Header of the label column in the written summary.
    pub fn label_header(self) -> &'static str {
        match self {
            ReportKind::OperatingSystem => "Operating System",
            ReportKind::Hostname => "Hostname",
            ReportKind::Vulnerability => "Vulnerability",
        }
    }

    /// File name prefix; the run stamp and `.csv` are appended.
    pub fn file_prefix(self) -> &'static str {
        match self {
            ReportKind::OperatingSystem => "os_summary",
            ReportKind::Hostname => "hostname_summary",
            ReportKind::Vulnerability => "vuln",
        }
    }

    /// Human-readable name used in console messages ("OS summary").
    pub fn display_name(self) -> &'static str {
        match self {
            ReportKind::OperatingSystem => "OS",
            ReportKind::Hostname => "Hostname",
            ReportKind::Vulnerability => "Vulnerability",
        }
    }

    /// Capitalized plural for "Processing ... summary" messages.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::OperatingSystem => "Operating Systems",
            ReportKind::Hostname => "Hostnames",
            ReportKind::Vulnerability => "Vulnerabilities",
        }
    }

    /// Plural noun for "Found N unique ..." messages.
    pub fn plural_noun(self) -> &'static str {
        match self {
            ReportKind::OperatingSystem => "operating systems",
            ReportKind::Hostname => "hostnames",
            ReportKind::Vulnerability => "vulnerabilities",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "os" | "operating-system" | "operating_system" => Ok(ReportKind::OperatingSystem),
            "hostname" | "host" => Ok(ReportKind::Hostname),
            "vuln" | "vulnerability" => Ok(ReportKind::Vulnerability),
            _ => Err(format!("Unknown report: {}", s)),
        }
    }
}

/// Zero-based positions of the tracked fields in the input table.
///
/// Columns are selected by position, never by header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Hostname column (default: 2, the 3rd column)
    pub hostname: usize,
    /// Operating system column (default: 4, the 5th column)
    pub operating_system: usize,
    /// Vulnerability column (default: 7, the 8th column)
    pub vulnerability: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            hostname: 2,
            operating_system: 4,
            vulnerability: 7,
        }
    }
}

impl ColumnMap {
    /// Create the default mapping (hostname 2, OS 4, vulnerability 7).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the hostname column
    pub fn with_hostname(mut self, index: usize) -> Self {
        self.hostname = index;
        self
    }

    /// Builder: set the operating system column
    pub fn with_operating_system(mut self, index: usize) -> Self {
        self.operating_system = index;
        self
    }

    /// Builder: set the vulnerability column
    pub fn with_vulnerability(mut self, index: usize) -> Self {
        self.vulnerability = index;
        self
    }

    /// Column index backing a report.
    pub fn index_for(&self, kind: ReportKind) -> usize {
        match kind {
            ReportKind::OperatingSystem => self.operating_system,
            ReportKind::Hostname => self.hostname,
            ReportKind::Vulnerability => self.vulnerability,
        }
    }

    /// Number of columns the input needs for every tracked field to exist.
    pub fn required_width(&self) -> usize {
        self.required_width_for(&ReportKind::ALL)
    }

    /// Number of columns the input needs for the given reports' fields.
    pub fn required_width_for(&self, kinds: &[ReportKind]) -> usize {
        kinds
            .iter()
            .map(|&kind| self.index_for(kind) + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Options for a summarization run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Inventory file to read
    pub input: PathBuf,
    /// Directory for reports (None = the input file's directory)
    pub output_dir: Option<PathBuf>,
    /// Column positions of the tracked fields
    pub columns: ColumnMap,
    /// Reports to produce, in run order (default: all three)
    pub reports: Vec<ReportKind>,
}

impl RunConfig {
    /// Create options for the given input file.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            columns: ColumnMap::default(),
            reports: ReportKind::ALL.to_vec(),
        }
    }

    /// Write reports into `dir` instead of next to the input.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the column mapping.
    pub fn columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    /// Produce only the given reports. Duplicates are ignored and the
    /// standard OS, Hostname, Vulnerability order is kept.
    pub fn reports(mut self, kinds: impl IntoIterator<Item = ReportKind>) -> Self {
        let selected: Vec<ReportKind> = kinds.into_iter().collect();
        self.reports = ReportKind::ALL
            .into_iter()
            .filter(|kind| selected.contains(kind))
            .collect();
        self
    }

    /// Directory reports will be written to.
    ///
    /// Falls back to the input's parent directory, or `.` when the input
    /// path has no directory component.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        match self.input.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
