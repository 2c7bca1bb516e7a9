//! Delimited text output

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: &str = "|";

/// Write each row's values joined by the output separator
pub fn write_delimited(table: &Table, writer: &mut dyn Write, config: &Config) -> Result<()> {
    let separator = config.separator_or(DEFAULT_SEPARATOR);
    if let Some(headings) = table.headings() {
        writeln!(writer, "{}", headings.join(separator))?;
    }
    for row in &table.rows {
        writeln!(writer, "{}", row.values(&table.order).join(separator))?;
    }
    Ok(())
}
