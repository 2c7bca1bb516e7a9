//! Delimited text parser (fields split by a regular expression)

use std::io::Read;

use regex::Regex;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;

use super::{build_table, read_text};

/// Read delimited text, splitting each line with the configured field regex
pub fn read_delimited(input: &mut dyn Read, config: &Config) -> Result<Table> {
    let regex = config.field_regex()?;
    let text = read_text(input, "separator")?;
    let lines = split_lines(&text, &regex, config.headings)?;

    if config.headings && lines.first().is_some_and(|h| h.iter().all(String::is_empty)) {
        return Err(TableError::Validation("no headings".to_string()));
    }

    build_table(lines, config)
}

/// Separators found at the edges of the first line
#[derive(Debug, Default, Clone, Copy)]
struct Edges {
    leading: bool,
    trailing: bool,
}

impl Edges {
    fn detect(tokens: &[&str]) -> Self {
        let multiple = tokens.len() > 1;
        Self {
            leading: multiple && tokens.first().is_some_and(|t| t.is_empty()),
            trailing: multiple && tokens.last().is_some_and(|t| t.is_empty()),
        }
    }

    fn strip<'a>(&self, mut tokens: Vec<&'a str>, line_num: usize) -> Result<Vec<&'a str>> {
        if self.leading {
            if let Some(t) = tokens.first().filter(|t| !t.is_empty()) {
                return Err(TableError::Validation(format!(
                    "line {line_num}: unexpected value {t:?} before the leading separator"
                )));
            }
            if !tokens.is_empty() {
                tokens.remove(0);
            }
        }
        if self.trailing {
            if let Some(t) = tokens.last().filter(|t| !t.is_empty()) {
                return Err(TableError::Validation(format!(
                    "line {line_num}: unexpected value {t:?} after the trailing separator"
                )));
            }
            tokens.pop();
        }
        Ok(tokens)
    }
}

/// Split every line; with headings, separators at the edges of the heading
/// line are stripped from all lines
fn split_lines(text: &str, regex: &Regex, headings: bool) -> Result<Vec<Vec<String>>> {
    let mut edges = Edges::default();
    let mut lines = Vec::new();

    for (pos, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = regex.split(line).collect();
        debug!(line = pos + 1, ?tokens, "tokens");
        if pos == 0 && headings {
            edges = Edges::detect(&tokens);
        }
        let tokens = edges.strip(tokens, pos + 1)?;
        lines.push(tokens.into_iter().map(str::to_string).collect());
    }

    Ok(lines)
}
