//! Data loading: read inventory files into memory.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Table**: row-major string cells with positional column access
//! - **Loader**: comma-delimited file parsing (`load_table`, `read_table`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use invsumlib::data::load_table;
//!
//! let table = load_table("inventory.csv")?;
//! let hostnames = table.column(2);
//! ```

pub mod loader;
pub mod table;

pub use loader::{load_table, read_table};
pub use table::Table;
