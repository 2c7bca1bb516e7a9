//! Configuration handling for supertable

use regex::Regex;

use crate::error::{Result, TableError};

/// Default input field separator: any run of whitespace
pub const DEFAULT_FIELD_SEPARATOR: &str = r"\s+";

/// Configuration for a conversion
#[derive(Debug, Clone)]
pub struct Config {
    /// Treat the first row as column names
    pub headings: bool,
    /// Input format name, abbreviation or pattern
    pub input_format: String,
    /// Output format name, abbreviation or pattern
    pub output_format: String,
    /// Preferred column order (patterns resolved against the discovered keys)
    pub order: Option<Vec<String>>,
    /// Regular expression splitting fields of delimited input
    pub field_separator: String,
    /// Separator between output fields; each format has its own default
    pub output_separator: Option<String>,
    /// Reverse the row order before writing
    pub reverse: bool,
    /// Column to sort rows by before writing
    pub sort_by: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headings: false,
            input_format: String::new(),
            output_format: String::new(),
            order: None,
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            output_separator: None,
            reverse: false,
            sort_by: None,
        }
    }
}

impl Config {
    /// Create a new Config converting between two formats
    pub fn new(input_format: impl Into<String>, output_format: impl Into<String>) -> Self {
        Self {
            input_format: input_format.into(),
            output_format: output_format.into(),
            ..Default::default()
        }
    }

    /// Treat the first row as column names
    pub fn with_headings(mut self, headings: bool) -> Self {
        self.headings = headings;
        self
    }

    /// Set the preferred column order
    pub fn with_order(mut self, order: Vec<String>) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the input field separator regex
    pub fn with_field_separator(mut self, regex: impl Into<String>) -> Self {
        self.field_separator = regex.into();
        self
    }

    /// Set the output separator
    pub fn with_output_separator(mut self, separator: impl Into<String>) -> Self {
        self.output_separator = Some(separator.into());
        self
    }

    /// Reverse rows before writing
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Sort rows by a column before writing
    pub fn with_sort_by(mut self, column: impl Into<String>) -> Self {
        self.sort_by = Some(column.into());
        self
    }

    /// Compile the input field separator
    pub fn field_regex(&self) -> Result<Regex> {
        Regex::new(&self.field_separator).map_err(|e| {
            TableError::Validation(format!(
                "invalid field separator {:?}: {}",
                self.field_separator, e
            ))
        })
    }

    /// Output separator, falling back to the format's default
    pub fn separator_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.output_separator.as_deref().unwrap_or(default)
    }
}
