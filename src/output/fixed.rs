//! Fixed-width text output

use std::io::Write;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

/// Separator used between padded columns when none is configured
pub const DEFAULT_SEPARATOR: &str = " ";

/// Write rows with every column left-justified to its widest value
pub fn write_fixed(table: &Table, writer: &mut dyn Write, config: &Config) -> Result<()> {
    let separator = config.separator_or(DEFAULT_SEPARATOR);
    let headings = table.headings();

    let mut widths: Vec<usize> = headings
        .map(|h| h.iter().map(|name| width(name)).collect())
        .unwrap_or_default();
    for row in &table.rows {
        for (col, value) in row.values(&table.order).into_iter().enumerate() {
            match widths.get_mut(col) {
                Some(w) => *w = (*w).max(width(value)),
                None => widths.push(width(value)),
            }
        }
    }
    debug!(?widths, "fixed-width column widths");

    if let Some(headings) = headings {
        let cells: Vec<&str> = headings.iter().map(String::as_str).collect();
        write_padded(writer, &cells, &widths, separator)?;
    }
    for row in &table.rows {
        write_padded(writer, &row.values(&table.order), &widths, separator)?;
    }
    Ok(())
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn write_padded(
    writer: &mut dyn Write,
    cells: &[&str],
    widths: &[usize],
    separator: &str,
) -> Result<()> {
    let line: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &w)| {
            let cell = cells.get(col).copied().unwrap_or("");
            format!("{cell:<w$}")
        })
        .collect();
    writeln!(writer, "{}", line.join(separator))?;
    Ok(())
}
