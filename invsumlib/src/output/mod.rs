//! Output: persist summary tables as delimited files.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **Writer**: serializes a `SummaryTable` to comma-delimited text
//! - **Naming**: the shared run stamp and per-report file names
//!
//! ## Example
//!
//! ```rust,ignore
//! use invsumlib::output::{report_path, write_summary, RunStamp};
//!
//! let stamp = RunStamp::now();
//! let path = report_path(dir, ReportKind::Hostname, &stamp);
//! write_summary(&table, &path)?;
//! ```

pub mod naming;
pub mod writer;

pub use naming::{report_file_name, report_path, RunStamp, STAMP_FORMAT};
pub use writer::{write_summary, write_summary_to};
