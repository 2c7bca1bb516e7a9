//! YAML sequence parser

use std::io::Read;

use serde_json::Value;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;

/// Read a YAML sequence of rows (sequences or mappings)
pub fn read_yaml(input: &mut dyn Read, config: &Config) -> Result<Table> {
    let value: Value =
        serde_yaml_ng::from_reader(input).map_err(|e| TableError::malformed("yaml", e))?;
    Table::from_document(value, config.order.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mappings() {
        let text = "- name: bob\n  age: 30\n- name: al\n  age: 9\n";
        let config = Config::default().with_order(vec!["name".to_string()]);
        let table = read_yaml(&mut text.as_bytes(), &config).unwrap();
        assert_eq!(table.order, vec!["name", "age"]);
        assert_eq!(table.rows[0].values(&table.order), vec!["bob", "30"]);
    }

    #[test]
    fn test_sequences() {
        let text = "- [a, b]\n- [c, true]\n";
        let table = read_yaml(&mut text.as_bytes(), &Config::default()).unwrap();
        assert_eq!(table.rows[1].values(&table.order), vec!["c", "true"]);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            read_yaml(&mut "- [a, b\n".as_bytes(), &Config::default()),
            Err(TableError::MalformedInput { format: "yaml", .. })
        ));
    }
}
