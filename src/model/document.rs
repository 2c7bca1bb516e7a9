//! Conversion of parsed JSON/YAML documents into tables

use serde_json::Value;

use crate::error::{Result, TableError};

use super::order::make_order;
use super::table::{Row, Table};

/// Check that a parsed document is a list of uniform rows of scalars
pub fn validate(root: &Value) -> Result<()> {
    let Value::Array(items) = root else {
        return Err(TableError::Validation(
            "root object is not a list".to_string(),
        ));
    };

    let Some(first) = items.first() else {
        return Ok(());
    };
    let expect_named = match first {
        Value::Object(_) => true,
        Value::Array(_) => false,
        other => {
            return Err(TableError::Validation(format!(
                "first row is a {}, not a list or mapping",
                kind(other)
            )))
        }
    };

    for (index, item) in items.iter().enumerate() {
        let values: Box<dyn Iterator<Item = &Value> + '_> = match (item, expect_named) {
            (Value::Object(map), true) => Box::new(map.values()),
            (Value::Array(fields), false) => Box::new(fields.iter()),
            _ => {
                return Err(TableError::Validation(format!(
                    "row {} type does not match first row",
                    index + 1
                )))
            }
        };
        for value in values {
            if scalar_text(value).is_none() {
                return Err(TableError::Validation(format!(
                    "row {} has a {} value; only strings, numbers and booleans are allowed",
                    index + 1,
                    kind(value)
                )));
            }
        }
    }
    Ok(())
}

impl Table {
    /// Build a table from a parsed document, computing the column order
    pub fn from_document(root: Value, preferred: Option<&[String]>) -> Result<Table> {
        validate(&root)?;

        let Value::Array(items) = root else {
            return Ok(Table::default());
        };

        let rows: Vec<Row> = items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Row::Named(
                    map.iter()
                        .map(|(k, v)| (k.clone(), scalar_text(v).unwrap_or_default()))
                        .collect(),
                ),
                Value::Array(fields) => Row::Positional(
                    fields
                        .iter()
                        .map(|v| scalar_text(v).unwrap_or_default())
                        .collect(),
                ),
                _ => Row::Positional(Vec::new()),
            })
            .collect();

        let order = make_order(&rows, preferred)?;
        Table::new(order, rows)
    }
}

/// Textual form of a primitive scalar
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
