//! JSON array parser

use std::io::Read;

use serde_json::Value;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;

/// Read a JSON list of rows (lists or objects)
pub fn read_json(input: &mut dyn Read, config: &Config) -> Result<Table> {
    let value: Value =
        serde_json::from_reader(input).map_err(|e| TableError::malformed("json", e))?;
    Table::from_document(value, config.order.as_deref())
}
