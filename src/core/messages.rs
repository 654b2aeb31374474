//! Error code to message text lookup.

use crate::models::error_kind::ErrorKind;
use anyhow::{bail, Result};
use std::collections::BTreeMap;

/// Message text per error kind; overrides win over built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: BTreeMap<ErrorKind, String>,
}

impl Messages {
    /// Build from a symbol-keyed table, rejecting unknown symbols.
    pub fn from_symbols(table: &BTreeMap<String, String>) -> Result<Self> {
        let mut overrides = BTreeMap::new();
        for (symbol, text) in table {
            let Some(kind) = ErrorKind::from_symbol(symbol) else {
                bail!("unknown error symbol in [messages]: {}", symbol);
            };
            overrides.insert(kind, text.clone());
        }
        Ok(Self { overrides })
    }

    pub fn text(&self, kind: ErrorKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let messages = Messages::default();
        assert_eq!(messages.text(ErrorKind::NotADirectory), "is not a directory");
    }

    #[test]
    fn test_override_by_symbol() {
        let mut table = BTreeMap::new();
        table.insert("non_writable".to_string(), "must be writable".to_string());
        let messages = Messages::from_symbols(&table).unwrap();
        assert_eq!(messages.text(ErrorKind::NotWritable), "must be writable");
        assert_eq!(messages.text(ErrorKind::NotReadable), "is not readable");
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let mut table = BTreeMap::new();
        table.insert("not_writable".to_string(), "x".to_string());
        assert!(Messages::from_symbols(&table).is_err());
    }
}
