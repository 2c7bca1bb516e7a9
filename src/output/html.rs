//! HTML table output

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

use super::{write_marked_up, Markup};

const HEADING: Markup<'static> = Markup {
    prefix: "<tr><th>",
    separator: "</th><th>",
    suffix: "</th></tr>",
};

const CELL: Markup<'static> = Markup {
    prefix: "<tr><td>",
    separator: "</td><td>",
    suffix: "</td></tr>",
};

/// Write the table as an HTML `<table>` element
pub fn write_html(table: &Table, writer: &mut dyn Write, _config: &Config) -> Result<()> {
    writeln!(writer, "<table>")?;
    writeln!(writer, "<tbody>")?;
    write_marked_up(table, writer, &HEADING, &CELL, html_escape)?;
    writeln!(writer, "</tbody>")?;
    writeln!(writer, "</table>")?;
    Ok(())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
