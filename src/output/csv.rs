//! CSV output format

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

/// Write comma-separated records, with a header record for named tables
pub fn write_csv(table: &Table, writer: &mut dyn Write, _config: &Config) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if let Some(headings) = table.headings() {
        csv_writer.write_record(headings).map_err(std::io::Error::from)?;
    }
    for row in &table.rows {
        csv_writer
            .write_record(row.values(&table.order))
            .map_err(std::io::Error::from)?;
    }
    csv_writer.flush()?;
    Ok(())
}
