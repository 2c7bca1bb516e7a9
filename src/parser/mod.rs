//! Parser layer for reading the supported text formats into a Table

mod csv;
mod delimited;
mod fixed;
mod json;
mod yaml;

use std::io::{ErrorKind, Read};

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::{Row, Table};

pub use self::csv::read_csv;
pub use self::delimited::read_delimited;
pub use self::fixed::{infer_columns, read_fixed};
pub use self::json::read_json;
pub use self::yaml::read_yaml;

/// Read the whole input stream as text; bad UTF-8 is malformed `format` input
pub(crate) fn read_text(input: &mut dyn Read, format: &'static str) -> Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => TableError::malformed(format, e),
        _ => TableError::Io(e),
    })?;
    Ok(text)
}

/// Assemble split lines into a table.
///
/// With headings the first line names the columns and every later line
/// becomes a named row; otherwise every line is positional.
pub(crate) fn build_table(lines: Vec<Vec<String>>, config: &Config) -> Result<Table> {
    if !config.headings {
        return Ok(Table::positional(lines));
    }

    let mut lines = lines.into_iter();
    let Some(headings) = lines.next() else {
        return Ok(Table::default());
    };

    let mut table = Table::named(headings)?;
    for values in lines {
        let row = Row::zip(&table.order, values)?;
        table.push(row)?;
    }
    Ok(table)
}
