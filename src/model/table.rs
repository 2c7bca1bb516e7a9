//! Table and Row data structures

use indexmap::IndexMap;

use crate::error::{Result, TableError};

use super::order::resolve_column;

/// A row in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Fields identified by position
    Positional(Vec<String>),
    /// Values identified by column name
    Named(IndexMap<String, String>),
}

impl Row {
    /// Check if the row is identified by column name
    pub fn is_named(&self) -> bool {
        matches!(self, Row::Named(_))
    }

    /// Build a named row by zipping values onto headings.
    ///
    /// Extra values are an error; missing values leave their columns absent.
    pub fn zip(headings: &[String], values: Vec<String>) -> Result<Row> {
        if values.len() > headings.len() {
            return Err(TableError::Validation(format!(
                "column without heading: {} values for {} headings",
                values.len(),
                headings.len()
            )));
        }
        Ok(Row::Named(
            headings.iter().cloned().zip(values).collect(),
        ))
    }

    /// Cell values in output order.
    ///
    /// Named rows follow `order` and render missing columns as empty strings.
    pub fn values<'a>(&'a self, order: &'a [String]) -> Vec<&'a str> {
        match self {
            Row::Positional(fields) => fields.iter().map(String::as_str).collect(),
            Row::Named(map) => order
                .iter()
                .map(|name| map.get(name).map(String::as_str).unwrap_or(""))
                .collect(),
        }
    }

    fn sort_key(&self, column: &SortColumn) -> &str {
        match (self, column) {
            (Row::Positional(fields), SortColumn::Index(i)) => {
                fields.get(*i).map(String::as_str).unwrap_or("")
            }
            (Row::Named(map), SortColumn::Name(name)) => {
                map.get(name).map(String::as_str).unwrap_or("")
            }
            _ => "",
        }
    }
}

enum SortColumn {
    Index(usize),
    Name(String),
}

/// A table: column order plus rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names used to serialize named rows
    pub order: Vec<String>,
    /// All rows, every one of the same variant
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from an order and rows, checking the rows share a variant
    pub fn new(order: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        check_unique(&order)?;
        let mut table = Self {
            order,
            rows: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            table.push(row)?;
        }
        Ok(table)
    }

    /// Create an empty named table with the given headings
    pub fn named(headings: Vec<String>) -> Result<Self> {
        check_unique(&headings)?;
        Ok(Self {
            order: headings,
            rows: Vec::new(),
        })
    }

    /// Create a positional table
    pub fn positional(rows: Vec<Vec<String>>) -> Self {
        Self {
            order: Vec::new(),
            rows: rows.into_iter().map(Row::Positional).collect(),
        }
    }

    /// Add a row, rejecting a variant different from the existing rows
    pub fn push(&mut self, row: Row) -> Result<()> {
        if let Some(first) = self.rows.first() {
            if first.is_named() != row.is_named() {
                return Err(TableError::Validation(
                    "row type does not match first row".to_string(),
                ));
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Add a named row whose values line up with the headings
    pub fn add_values<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let row = Row::zip(&self.order, values)?;
        self.push(row)
    }

    /// Whether rows are named (an empty table with headings counts as named)
    pub fn is_named(&self) -> bool {
        match self.rows.first() {
            Some(row) => row.is_named(),
            None => !self.order.is_empty(),
        }
    }

    /// Headings to emit before the rows, if the table is named
    pub fn headings(&self) -> Option<&[String]> {
        if self.is_named() && !self.order.is_empty() {
            Some(&self.order)
        } else {
            None
        }
    }

    /// Fail if a named row would have to be written without a column order
    pub fn check_writable(&self) -> Result<()> {
        let has_keys = |row: &Row| matches!(row, Row::Named(map) if !map.is_empty());
        if self.order.is_empty() && self.rows.iter().any(has_keys) {
            return Err(TableError::MissingColumnOrder);
        }
        Ok(())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Reverse the row order
    pub fn reverse(&mut self) {
        self.rows.reverse();
    }

    /// Sort rows by one column's value.
    ///
    /// Named tables resolve `column` against the order; positional tables
    /// take a zero-based index. The sort is stable.
    pub fn sort_by_column(&mut self, column: &str) -> Result<()> {
        let key = if self.is_named() {
            let keys = self.order.iter().cloned().collect();
            SortColumn::Name(resolve_column(column, &keys)?)
        } else {
            let index = column.parse::<usize>().map_err(|_| {
                TableError::Validation(format!(
                    "rows have no column names; sort by a column index, not {column:?}"
                ))
            })?;
            let widest = self
                .rows
                .iter()
                .map(|row| match row {
                    Row::Positional(fields) => fields.len(),
                    Row::Named(_) => 0,
                })
                .max()
                .unwrap_or(0);
            if index >= widest {
                return Err(TableError::Validation(format!(
                    "column index {index} is out of range; rows have at most {widest} columns"
                )));
            }
            SortColumn::Index(index)
        };
        self.rows.sort_by(|a, b| a.sort_key(&key).cmp(b.sort_key(&key)));
        Ok(())
    }
}

/// Reject duplicated column names
pub(crate) fn check_unique(headings: &[String]) -> Result<()> {
    for (i, heading) in headings.iter().enumerate() {
        if headings[..i].contains(heading) {
            return Err(TableError::Validation(format!(
                "duplicate heading {heading:?}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(pairs: &[(&str, &str)]) -> Row {
        Row::Named(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_mixed_rows_rejected() {
        let rows = vec![
            Row::Positional(vec!["a".into()]),
            named(&[("a", "1")]),
        ];
        assert!(matches!(
            Table::new(Vec::new(), rows),
            Err(TableError::Validation(_))
        ));
    }

    #[test]
    fn test_values_fill_missing_columns() {
        let order = vec!["a".to_string(), "b".to_string()];
        let row = named(&[("b", "2")]);
        assert_eq!(row.values(&order), vec!["", "2"]);
    }

    #[test]
    fn test_add_values() {
        let mut table = Table::named(vec!["Name".into(), "Network".into()]).unwrap();
        table.add_values(["bob", "libera"]).unwrap();
        assert_eq!(table.rows[0], named(&[("Name", "bob"), ("Network", "libera")]));
        assert!(table.add_values(["a", "b", "c"]).is_err());
    }

    #[test]
    fn test_duplicate_headings_rejected() {
        assert!(Table::named(vec!["a".into(), "a".into()]).is_err());
    }

    #[test]
    fn test_check_writable() {
        let table = Table::new(Vec::new(), vec![named(&[("a", "1")])]).unwrap();
        assert!(matches!(
            table.check_writable(),
            Err(TableError::MissingColumnOrder)
        ));
        assert!(Table::positional(vec![vec!["x".into()]]).check_writable().is_ok());
    }

    #[test]
    fn test_empty_named_row_writable() {
        let table = Table::new(Vec::new(), vec![named(&[])]).unwrap();
        assert!(table.check_writable().is_ok());
    }

    #[test]
    fn test_sort_named() {
        let mut table = Table::named(vec!["name".into(), "start".into()]).unwrap();
        table.add_values(["b", "2"]).unwrap();
        table.add_values(["a", "3"]).unwrap();
        table.add_values(["c", "1"]).unwrap();
        table.sort_by_column("sta").unwrap();
        let names: Vec<_> = table.rows.iter().map(|r| r.values(&table.order)[0]).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_positional_needs_index() {
        let mut table = Table::positional(vec![
            vec!["b".into(), "1".into()],
            vec!["a".into(), "2".into()],
        ]);
        assert!(table.sort_by_column("name").is_err());
        table.sort_by_column("0").unwrap();
        assert_eq!(table.rows[0], Row::Positional(vec!["a".into(), "2".into()]));
    }

    #[test]
    fn test_sort_index_out_of_range() {
        let mut table = Table::positional(vec![vec!["b".into()], vec!["a".into(), "x".into()]]);
        assert!(matches!(
            table.sort_by_column("2"),
            Err(TableError::Validation(_))
        ));
        table.sort_by_column("1").unwrap();
        assert_eq!(table.rows[0], Row::Positional(vec!["b".into()]));
    }

    #[test]
    fn test_headings_only_for_named() {
        let table = Table::positional(vec![vec!["x".into()]]);
        assert!(table.headings().is_none());
        let table = Table::named(vec!["a".into()]).unwrap();
        assert_eq!(table.headings(), Some(&["a".to_string()][..]));
    }
}
