//! YAML output format

use std::io::Write;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;

use super::document_rows;

/// Write rows as a YAML sequence with sorted keys
pub fn write_yaml(table: &Table, writer: &mut dyn Write, _config: &Config) -> Result<()> {
    let rows = document_rows(table);
    serde_yaml_ng::to_writer(&mut *writer, &rows)
        .map_err(|e| TableError::Io(std::io::Error::other(e)))?;
    Ok(())
}
