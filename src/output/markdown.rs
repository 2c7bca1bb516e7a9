//! Markdown pipe-table output

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

use super::Markup;

const LINE: Markup<'static> = Markup {
    prefix: "| ",
    separator: " | ",
    suffix: " |",
};

/// Write the table as a Markdown pipe table
pub fn write_markdown(table: &Table, writer: &mut dyn Write, _config: &Config) -> Result<()> {
    if let Some(headings) = table.headings() {
        let cells: Vec<String> = headings.iter().map(|h| escape_pipes(h)).collect();
        LINE.write_line(writer, &cells)?;
        LINE.write_line(writer, &vec!["---"; headings.len()])?;
    }
    for row in &table.rows {
        let cells: Vec<String> = row
            .values(&table.order)
            .into_iter()
            .map(escape_pipes)
            .collect();
        LINE.write_line(writer, &cells)?;
    }
    Ok(())
}

fn escape_pipes(s: &str) -> String {
    s.replace('|', "\\|")
}
