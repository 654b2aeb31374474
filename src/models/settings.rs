//! Settings file model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Directory attributes to validate, plus message overrides keyed by symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub directories: BTreeMap<String, String>,
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl SettingsFile {
    /// Attribute value, treating an empty string as absent.
    pub fn directory(&self, attribute: &str) -> Option<&str> {
        self.directories
            .get(attribute)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
