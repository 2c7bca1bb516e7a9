//! JSON output format

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

use super::document_rows;

/// Write rows as a pretty-printed JSON list with sorted keys
pub fn write_json(table: &Table, writer: &mut dyn Write, _config: &Config) -> Result<()> {
    let rows = document_rows(table);
    serde_json::to_writer_pretty(&mut *writer, &rows).map_err(std::io::Error::from)?;
    writeln!(writer)?;
    Ok(())
}
