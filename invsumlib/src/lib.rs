//! # invsumlib
//!
//! Frequency summaries over server inventory files.
//!
//! ## Overview
//!
//! An inventory is a comma-delimited table with one row per finding. Three
//! columns are tracked, addressed by position rather than header label:
//!
//! - **Hostname** (column 2): blank and null-like values are dropped
//! - **Operating system** (column 4): blank and null-like values count as `"Unknown"`
//! - **Vulnerability** (column 7): blank and null-like values are dropped
//!
//! Each column becomes a [`SummaryTable`]: distinct trimmed labels with their
//! counts, sorted by byte order. Null-like means empty after trimming, or one
//! of `nan`, `NaN`, `null`, `NULL`.
//!
//! ## Pipeline
//!
//! 1. [`data`]: load the file into a [`Table`] of string cells
//! 2. [`summary`]: summarize one column under a [`NullPolicy`]
//! 3. [`output`]: write each summary to `<prefix>_<YYYYMMDD_HHMMSS>.csv`
//!
//! [`run()`] drives all three stages and reports per-report outcomes.
//!
//! ## Example
//!
//! ```rust
//! use invsumlib::{run, ReportKind, RunConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("inventory.csv");
//! fs::write(&input, "id,site,host,ip,os,owner,env,vuln\n\
//!                    1,east,web01,10.0.0.1,Linux,ops,prod,CVE-2021-1\n").unwrap();
//!
//! let report = run(&RunConfig::new(&input)).unwrap();
//! assert!(report.is_complete());
//!
//! let hosts = &report.outcome(ReportKind::Hostname).unwrap().summary;
//! assert_eq!(hosts.count_of("web01"), Some(1));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod run;
pub mod summary;

pub use data::{load_table, read_table, Table};
pub use error::InvsumError;
pub use options::{ColumnMap, NullPolicy, ReportKind, RunConfig};
pub use output::{report_file_name, report_path, write_summary, RunStamp};
pub use run::{run, run_with_stamp, ColumnShortfall, ReportOutcome, ReportStatus, RunReport};
pub use summary::{
    is_null_like, normalize, summarize_column, summarize_report, SummaryEntry, SummaryTable,
};

/// Result type for invsumlib operations
pub type Result<T> = std::result::Result<T, InvsumError>;
