//! Output formatting for tables

mod bbcode;
mod csv;
mod delimited;
mod fixed;
mod html;
mod json;
mod markdown;
mod yaml;

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::model::{Row, Table};

pub use self::bbcode::write_bbcode;
pub use self::csv::write_csv;
pub use self::delimited::write_delimited;
pub use self::fixed::write_fixed;
pub use self::html::write_html;
pub use self::json::write_json;
pub use self::markdown::write_markdown;
pub use self::yaml::write_yaml;

/// Prefix, separator and suffix wrapped around the cells of one line
pub(crate) struct Markup<'a> {
    pub prefix: &'a str,
    pub separator: &'a str,
    pub suffix: &'a str,
}

impl Markup<'_> {
    pub(crate) fn write_line<S: AsRef<str>>(
        &self,
        writer: &mut dyn Write,
        cells: &[S],
    ) -> Result<()> {
        write!(writer, "{}", self.prefix)?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(writer, "{}", self.separator)?;
            }
            write!(writer, "{}", cell.as_ref())?;
        }
        writeln!(writer, "{}", self.suffix)?;
        Ok(())
    }
}

/// Write headings (if any) and rows through the given markup, escaping cells
pub(crate) fn write_marked_up(
    table: &Table,
    writer: &mut dyn Write,
    heading: &Markup<'_>,
    cell: &Markup<'_>,
    escape: fn(&str) -> String,
) -> Result<()> {
    if let Some(headings) = table.headings() {
        let cells: Vec<String> = headings.iter().map(|h| escape(h)).collect();
        heading.write_line(writer, &cells)?;
    }
    for row in &table.rows {
        let cells: Vec<String> = row.values(&table.order).into_iter().map(escape).collect();
        cell.write_line(writer, &cells)?;
    }
    Ok(())
}

/// Serializable form of a row for JSON and YAML; named rows get sorted keys
#[derive(Serialize)]
#[serde(untagged)]
pub(crate) enum DocumentRow<'a> {
    Positional(&'a [String]),
    Named(BTreeMap<&'a str, &'a str>),
}

pub(crate) fn document_rows(table: &Table) -> Vec<DocumentRow<'_>> {
    table
        .rows
        .iter()
        .map(|row| match row {
            Row::Positional(fields) => DocumentRow::Positional(fields),
            Row::Named(map) => {
                DocumentRow::Named(map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect())
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Config;
    use crate::error::Result;
    use crate::model::Table;

    pub(crate) type WriteFn = fn(&Table, &mut dyn std::io::Write, &Config) -> Result<()>;

    pub(crate) fn people() -> Table {
        let mut table = Table::named(vec!["name".into(), "age".into()]).unwrap();
        table.add_values(["bob", "30"]).unwrap();
        table.add_values(["al", "9"]).unwrap();
        table
    }

    pub(crate) fn render(write: WriteFn, table: &Table, config: &Config) -> String {
        let mut buf = Vec::new();
        write(table, &mut buf, config).unwrap();
        String::from_utf8(buf).unwrap()
    }
}
