//! Fixed-width text parser

use std::io::Read;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

use super::{build_table, read_text};

/// A column as a half-open character range; `end` of `None` runs to end of line
pub type ColumnSpan = (usize, Option<usize>);

/// Read fixed-width text, inferring column boundaries from blank bands
pub fn read_fixed(input: &mut dyn Read, config: &Config) -> Result<Table> {
    let text = read_text(input, "fixed")?;
    let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();

    let columns = infer_columns(&lines);
    debug!(?columns, "fixed-width columns");

    let cells = lines
        .iter()
        .map(|line| columns.iter().map(|span| slice(line, *span)).collect())
        .collect();

    build_table(cells, config)
}

/// Infer column spans from character columns that are blank on every line.
///
/// Index `c` closes the current field when every line is whitespace (or
/// shorter than `c`) at `c` and some line has content between the field
/// start and `c`. Blank bands at either edge never form a field.
pub fn infer_columns(lines: &[Vec<char>]) -> Vec<ColumnSpan> {
    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut columns = Vec::new();
    let mut start = 0;

    for c in 0..width {
        let blank = lines
            .iter()
            .all(|line| line.get(c).map_or(true, |ch| ch.is_whitespace()));
        if blank && lines.iter().any(|line| has_content(line, start, Some(c))) {
            columns.push((start, Some(c)));
            start = c;
        }
    }

    if lines.iter().any(|line| has_content(line, start, None)) {
        columns.push((start, None));
    }

    columns
}

fn range(line: &[char], start: usize, end: Option<usize>) -> &[char] {
    let end = end.unwrap_or(line.len()).min(line.len());
    if start >= end {
        return &[];
    }
    &line[start..end]
}

fn has_content(line: &[char], start: usize, end: Option<usize>) -> bool {
    range(line, start, end).iter().any(|ch| !ch.is_whitespace())
}

fn slice(line: &[char], (start, end): ColumnSpan) -> String {
    range(line, start, end)
        .iter()
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn chars(lines: &[&str]) -> Vec<Vec<char>> {
        lines.iter().map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn test_worked_example() {
        let config = Config::default().with_headings(true);
        let table = read_fixed(&mut "NAME AGE\nBob  30\nAl   9\n".as_bytes(), &config).unwrap();
        assert_eq!(table.order, vec!["NAME", "AGE"]);
        assert_eq!(table.rows[0].values(&table.order), vec!["Bob", "30"]);
        assert_eq!(table.rows[1].values(&table.order), vec!["Al", "9"]);
    }

    #[test]
    fn test_ragged_lines() {
        let columns = infer_columns(&chars(&["aa bb", "a  b ", "x  y"]));
        assert_eq!(columns, vec![(0, Some(2)), (2, None)]);
    }

    #[test]
    fn test_short_line_counts_as_blank() {
        // column 3 is past the end of "ab" and blank elsewhere
        let columns = infer_columns(&chars(&["ab", "abc d", "xyz e"]));
        assert_eq!(columns, vec![(0, Some(3)), (3, None)]);
    }

    #[test]
    fn test_leading_blank_band_absorbed() {
        let columns = infer_columns(&chars(&["   a b", "   c d"]));
        assert_eq!(columns, vec![(0, Some(4)), (4, None)]);
    }

    #[test]
    fn test_trailing_blank_band_dropped() {
        let table =
            read_fixed(&mut "a  b   \nc  d   \n".as_bytes(), &Config::default()).unwrap();
        assert_eq!(
            table.rows,
            vec![
                Row::Positional(vec!["a".into(), "b".into()]),
                Row::Positional(vec!["c".into(), "d".into()]),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(infer_columns(&[]).is_empty());
        let table = read_fixed(&mut "".as_bytes(), &Config::default()).unwrap();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_invalid_utf8() {
        let result = read_fixed(&mut &b"a b\n\xff c\n"[..], &Config::default());
        assert!(matches!(
            result,
            Err(crate::error::TableError::MalformedInput { format: "fixed", .. })
        ));
    }
}
