//! Writing summary tables as comma-delimited files.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::InvsumError;
use crate::summary::SummaryTable;
use crate::Result;

/// Serialize a summary: header line, then one `label,count` line per entry.
///
/// Labels are quoted only when they contain a comma, a quote or a line break.
pub fn write_summary_to<W: Write>(table: &SummaryTable, writer: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(table.headers())?;
    for entry in &table.entries {
        wtr.write_record([entry.label.as_str(), entry.count.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a summary to `path`, creating missing parent directories.
pub fn write_summary(table: &SummaryTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: csv::Error| InvsumError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_err(csv::Error::from(e)))?;
    }
    let file = File::create(path).map_err(|e| write_err(csv::Error::from(e)))?;
    write_summary_to(table, file).map_err(write_err)?;

    debug!(
        path = %path.display(),
        rows = table.entries.len(),
        "wrote summary"
    );
    Ok(())
}
