//! Column order resolution

use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, TableError};

use super::table::Row;

/// Resolve a column pattern to exactly one key.
///
/// An exact key name always wins. Otherwise the pattern is a regular
/// expression searched anywhere within each key.
pub fn resolve_column(pattern: &str, keys: &BTreeSet<String>) -> Result<String> {
    if keys.contains(pattern) {
        return Ok(pattern.to_string());
    }

    let mut matches: Vec<String> = match Regex::new(pattern) {
        Ok(regex) => keys.iter().filter(|k| regex.is_match(k)).cloned().collect(),
        Err(_) => Vec::new(),
    };

    match matches.len() {
        1 => Ok(matches.swap_remove(0)),
        0 => Err(TableError::NoSuchColumn {
            pattern: pattern.to_string(),
            available: keys.iter().cloned().collect(),
        }),
        _ => Err(TableError::AmbiguousColumn {
            pattern: pattern.to_string(),
            matches,
        }),
    }
}

/// Compute the column order for named rows.
///
/// Preferred columns come first in caller order, then every other key in
/// ascending lexical order. Positional rows have no order.
pub fn make_order(rows: &[Row], preferred: Option<&[String]>) -> Result<Vec<String>> {
    let mut keys: BTreeSet<String> = BTreeSet::new();
    for row in rows {
        if let Row::Named(map) = row {
            keys.extend(map.keys().cloned());
        }
    }

    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let mut order = Vec::with_capacity(keys.len());
    for pattern in preferred.unwrap_or_default() {
        let key = resolve_column(pattern, &keys)?;
        keys.remove(&key);
        order.push(key);
    }
    order.extend(keys);

    debug!(?order, "column order");
    Ok(order)
}
