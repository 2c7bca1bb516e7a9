//! CSV parser

use std::io::Read;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;

use super::build_table;

/// Read comma-separated records; the header row is optional
pub fn read_csv(input: &mut dyn Read, config: &Config) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| {
            TableError::malformed("csv", format!("record {}: {}", line_num + 1, e))
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }

    build_table(records, config)
}
