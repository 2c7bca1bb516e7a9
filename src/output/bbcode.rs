//! BBCode table output

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

use super::{write_marked_up, Markup};

const HEADING: Markup<'static> = Markup {
    prefix: "[tr][th]",
    separator: "[/th][th]",
    suffix: "[/th][/tr]",
};

const CELL: Markup<'static> = Markup {
    prefix: "[tr][td]",
    separator: "[/td][td]",
    suffix: "[/td][/tr]",
};

/// Write the table as BBCode `[table]` markup
pub fn write_bbcode(table: &Table, writer: &mut dyn Write, _config: &Config) -> Result<()> {
    writeln!(writer, "[table]")?;
    write_marked_up(table, writer, &HEADING, &CELL, |s| s.to_string())?;
    writeln!(writer, "[/table]")?;
    Ok(())
}
