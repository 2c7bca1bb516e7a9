//! Strategy registry: format names mapped to read/write functions

use std::fmt;
use std::io::{Read, Write};

use regex::Regex;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;
use crate::{output, parser};

/// Reads a whole input stream into a table
pub type ReadFn = fn(&mut dyn Read, &Config) -> Result<Table>;

/// Serializes a whole table to a writer
pub type WriteFn = fn(&Table, &mut dyn Write, &Config) -> Result<()>;

/// Direction a strategy is used in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
        }
    }
}

/// A named format with optional read and write support
#[derive(Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub read: Option<ReadFn>,
    pub write: Option<WriteFn>,
}

impl Strategy {
    /// Check if the strategy can be used in a direction
    pub fn supports(&self, direction: Direction) -> bool {
        match direction {
            Direction::Read => self.read.is_some(),
            Direction::Write => self.write.is_some(),
        }
    }

    /// Parse an input stream into a table
    pub fn read(&self, input: &mut dyn Read, config: &Config) -> Result<Table> {
        let read = self.read.ok_or_else(|| self.unsupported(Direction::Read))?;
        read(input, config)
    }

    /// Serialize a table, refusing named rows without a column order
    pub fn write(&self, table: &Table, writer: &mut dyn Write, config: &Config) -> Result<()> {
        let write = self.write.ok_or_else(|| self.unsupported(Direction::Write))?;
        table.check_writable()?;
        write(table, writer, config)
    }

    fn unsupported(&self, direction: Direction) -> TableError {
        TableError::UnsupportedDirection {
            format: self.name.to_string(),
            direction,
        }
    }
}

/// The set of available strategies
pub struct Registry {
    strategies: Vec<Strategy>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry with every supported format
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Strategy {
                name: "bbcode",
                read: None,
                write: Some(output::write_bbcode),
            },
            Strategy {
                name: "csv",
                read: Some(parser::read_csv),
                write: Some(output::write_csv),
            },
            Strategy {
                name: "fixed",
                read: Some(parser::read_fixed),
                write: Some(output::write_fixed),
            },
            Strategy {
                name: "html",
                read: None,
                write: Some(output::write_html),
            },
            Strategy {
                name: "json",
                read: Some(parser::read_json),
                write: Some(output::write_json),
            },
            Strategy {
                name: "markdown",
                read: None,
                write: Some(output::write_markdown),
            },
            Strategy {
                name: "separator",
                read: Some(parser::read_delimited),
                write: Some(output::write_delimited),
            },
            Strategy {
                name: "yaml",
                read: Some(parser::read_yaml),
                write: Some(output::write_yaml),
            },
        ])
    }

    /// Create a registry from an explicit list of strategies
    pub fn with_strategies(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    /// All registered strategies
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Names of the strategies supporting a direction
    pub fn names(&self, direction: Direction) -> Vec<&'static str> {
        self.strategies
            .iter()
            .filter(|s| s.supports(direction))
            .map(|s| s.name)
            .collect()
    }

    /// Resolve a format name, abbreviation or pattern to one strategy.
    ///
    /// An exact name wins; otherwise `name` is a regex matched at the start
    /// of each strategy name and must match exactly one.
    pub fn resolve(&self, name: &str, direction: Direction) -> Result<&Strategy> {
        let strategy = match self.strategies.iter().find(|s| s.name == name) {
            Some(strategy) => strategy,
            None => {
                let matches: Vec<&Strategy> = match Regex::new(&format!("^(?:{name})")) {
                    Ok(regex) => self
                        .strategies
                        .iter()
                        .filter(|s| regex.is_match(s.name))
                        .collect(),
                    Err(_) => Vec::new(),
                };
                match matches.as_slice() {
                    [only] => *only,
                    [] => {
                        return Err(TableError::UnknownFormat {
                            name: name.to_string(),
                            available: self
                                .names(direction)
                                .iter()
                                .map(|n| n.to_string())
                                .collect(),
                        })
                    }
                    _ => {
                        return Err(TableError::AmbiguousFormat {
                            name: name.to_string(),
                            matches: matches.iter().map(|s| s.name.to_string()).collect(),
                        })
                    }
                }
            }
        };

        if !strategy.supports(direction) {
            return Err(strategy.unsupported(direction));
        }
        debug!(requested = name, resolved = strategy.name, %direction, "resolved format");
        Ok(strategy)
    }

    /// Render a table to a string with the named output format
    pub fn render(&self, table: &Table, format: &str, config: &Config) -> Result<String> {
        let strategy = self.resolve(format, Direction::Write)?;
        let mut buf = Vec::new();
        strategy.write(table, &mut buf, config)?;
        String::from_utf8(buf).map_err(|e| {
            TableError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Read the input in one format and write it to the output in another.
    ///
    /// The output is fully rendered in memory first, so nothing is written
    /// when any step fails.
    pub fn convert(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        config: &Config,
    ) -> Result<()> {
        let reader = self.resolve(&config.input_format, Direction::Read)?;
        let writer = self.resolve(&config.output_format, Direction::Write)?;

        let mut table = reader.read(input, config)?;
        debug!(rows = table.row_count(), order = ?table.order, "read table");

        if let Some(column) = &config.sort_by {
            table.sort_by_column(column)?;
        }
        if config.reverse {
            table.reverse();
        }

        let mut buf = Vec::new();
        writer.write(&table, &mut buf, config)?;
        output.write_all(&buf)?;
        output.flush()?;
        Ok(())
    }
}

/// Convert using the default registry
pub fn convert(input: &mut dyn Read, output: &mut dyn Write, config: &Config) -> Result<()> {
    Registry::new().convert(input, output, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn three_formats() -> Registry {
        let all = Registry::new();
        Registry::with_strategies(
            all.strategies()
                .iter()
                .filter(|s| matches!(s.name, "csv" | "json" | "yaml"))
                .copied()
                .collect(),
        )
    }

    fn run(input: &str, config: &Config) -> Result<String> {
        let mut out = Vec::new();
        convert(&mut input.as_bytes(), &mut out, config)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_abbreviations() {
        let registry = three_formats();
        assert_eq!(registry.resolve("j", Direction::Read).unwrap().name, "json");
        assert_eq!(registry.resolve("y", Direction::Write).unwrap().name, "yaml");
        assert!(matches!(
            registry.resolve("a", Direction::Read),
            Err(TableError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_ambiguous_pattern() {
        let registry = three_formats();
        assert!(matches!(
            registry.resolve("[jy]", Direction::Read),
            Err(TableError::AmbiguousFormat { .. })
        ));
        assert!(matches!(
            registry.resolve("(", Direction::Read),
            Err(TableError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_exact_name() {
        let registry = Registry::new();
        assert_eq!(registry.resolve("csv", Direction::Read).unwrap().name, "csv");
        assert_eq!(registry.resolve("s", Direction::Read).unwrap().name, "separator");
    }

    #[test]
    fn test_unsupported_direction() {
        let registry = Registry::new();
        assert!(matches!(
            registry.resolve("html", Direction::Read),
            Err(TableError::UnsupportedDirection { .. })
        ));
        assert!(registry.resolve("m", Direction::Write).is_ok());
    }

    #[test]
    fn test_names_by_direction() {
        let registry = Registry::new();
        assert_eq!(
            registry.names(Direction::Read),
            vec!["csv", "fixed", "json", "separator", "yaml"]
        );
        assert_eq!(registry.names(Direction::Write).len(), 8);
    }

    #[test]
    fn test_missing_column_order() {
        let row = Row::Named([("a".to_string(), "1".to_string())].into_iter().collect());
        let table = Table::new(Vec::new(), vec![row]).unwrap();
        let registry = Registry::new();
        for format in ["csv", "json", "html", "separator"] {
            assert!(matches!(
                registry.render(&table, format, &Config::default()),
                Err(TableError::MissingColumnOrder)
            ));
        }
    }

    #[test]
    fn test_empty_mapping_rows() {
        let config = Config::new("json", "json");
        assert_eq!(run("[{}]", &config).unwrap(), "[\n  {}\n]\n");
    }

    #[test]
    fn test_json_keys_sorted() {
        let config = Config::new("json", "json");
        let out = run(r#"[{"b": 1, "a": 2}]"#, &config).unwrap();
        assert!(out.find("\"a\"").unwrap() < out.find("\"b\"").unwrap());
    }

    #[test]
    fn test_convert_separator_to_markdown() {
        let config = Config::new("sep", "mark").with_headings(true);
        let out = run("name age\nbob 30\n", &config).unwrap();
        assert_eq!(out, "| name | age |\n| --- | --- |\n| bob | 30 |\n");
    }

    #[test]
    fn test_reverse_and_sort() {
        let config = Config::new("csv", "csv")
            .with_headings(true)
            .with_sort_by("name")
            .with_reverse(true);
        let out = run("name,n\nb,1\na,2\nc,3\n", &config).unwrap();
        assert_eq!(out, "name,n\nc,3\nb,1\na,2\n");
    }

    #[test]
    fn test_failure_writes_nothing() {
        let config = Config::new("json", "csv");
        let mut out = Vec::new();
        let result = convert(&mut r#"[{"a": [1]}]"#.as_bytes(), &mut out, &config);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_idempotent_render() {
        let config = Config::new("json", "fixed");
        let input = r#"[{"host": "alpha", "port": 22}, {"host": "beta", "port": 8080}]"#;
        assert_eq!(run(input, &config).unwrap(), run(input, &config).unwrap());
    }
}
