//! Settings file loading and validation.

use crate::constants;
use crate::core::validation::{EachValidator, Errors, ReadWriteValidator, Validatable};
use crate::models::settings::SettingsFile;
use crate::util::trace::{NoopTracer, Tracer};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings path from the CLI (flag or env), else the default file name.
pub fn resolve_path(config_arg: Option<PathBuf>) -> PathBuf {
    config_arg.unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CONFIG_FILE))
}

pub fn load(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        bail!("settings file not found: {}", path.display());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings {}", path.display()))?;
    let settings: SettingsFile = toml::from_str(&content)
        .with_context(|| format!("parse settings {}", path.display()))?;
    Ok(settings)
}

impl SettingsFile {
    /// Validate every directory attribute in name order.
    pub fn validate_with(&self, tracer: &dyn Tracer) -> Result<Errors> {
        let validator = ReadWriteValidator::new().with_tracer(tracer);
        let mut errors = Errors::new();
        for attribute in self.directories.keys() {
            validator.validate_each(&mut errors, attribute, self.directory(attribute))?;
        }
        Ok(errors)
    }
}

impl Validatable for SettingsFile {
    fn validate(&self) -> Result<Errors> {
        self.validate_with(&NoopTracer)
    }
}
