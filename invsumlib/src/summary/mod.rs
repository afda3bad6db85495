//! Summarization: turn raw column values into sorted count tables.
//!
//! This module is the core of the pipeline. It provides:
//!
//! - **Normalization**: whitespace trimming and null-like token detection
//! - **Summarizer**: a single routine parameterized by [`NullPolicy`]
//!   that counts and sorts labels
//!
//! ## Example
//!
//! ```rust
//! use invsumlib::summary::summarize_column;
//! use invsumlib::NullPolicy;
//!
//! let table = summarize_column(["web01", "", "web01"], NullPolicy::Drop, "Hostname");
//! assert_eq!(table.entries.len(), 1);
//! assert_eq!(table.entries[0].count, 2);
//! ```
//!
//! [`NullPolicy`]: crate::options::NullPolicy

pub mod normalize;
pub mod summarizer;

pub use normalize::{is_null_like, normalize, NULL_TOKENS, UNKNOWN_LABEL};
pub use summarizer::{
    summarize_column, summarize_report, SummaryEntry, SummaryTable, COUNT_HEADER,
};
