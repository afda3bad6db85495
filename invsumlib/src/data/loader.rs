//! Loading comma-delimited inventory files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::data::table::Table;
use crate::error::InvsumError;
use crate::Result;

/// Load a comma-delimited file whose first line is a header.
///
/// Rows shorter than the header are padded with empty cells. A row longer
/// than the header is rejected, as is a file without a header line.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(InvsumError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| InvsumError::Load {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    let table = read_table(file, path)?;

    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.row_count(),
        "loaded inventory table"
    );
    Ok(table)
}

/// Parse delimited text from any reader. `path` is only used in errors.
pub fn read_table<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let load_err = |source: csv::Error| InvsumError::Load {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(load_err)?
        .iter()
        .map(|s| s.to_string())
        .collect();
    if headers.is_empty() {
        return Err(InvsumError::EmptyInput(path.to_path_buf()));
    }
    let width = headers.len();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(load_err)?;
        if record.len() > width {
            return Err(InvsumError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: width,
                found: record.len(),
            });
        }
        let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(Table::new(headers, rows))
}
