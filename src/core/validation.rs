//! Record validation: per-attribute error collection and attribute rules.

use crate::core::checker::DirectoryChecker;
use crate::core::messages::Messages;
use crate::models::error_kind::ErrorKind;
use crate::util::trace::{NoopTracer, Tracer};
use anyhow::{Context, Result};
use serde::Serialize;

/// Error codes recorded on a record, tagged with the attribute they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Errors {
    entries: Vec<AttributeError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeError {
    pub attribute: String,
    pub kind: ErrorKind,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: &str, kind: ErrorKind) {
        self.entries.push(AttributeError {
            attribute: attribute.to_string(),
            kind,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeError> {
        self.entries.iter()
    }

    /// Errors recorded for one attribute, in the order they were added.
    pub fn on(&self, attribute: &str) -> Vec<ErrorKind> {
        self.entries
            .iter()
            .filter(|e| e.attribute == attribute)
            .map(|e| e.kind)
            .collect()
    }

    /// Distinct attributes with at least one error, in first-seen order.
    pub fn attributes(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !out.contains(&e.attribute.as_str()) {
                out.push(&e.attribute);
            }
        }
        out
    }

    /// Human-readable `"<attribute> <message>"` lines.
    pub fn full_messages(&self, messages: &Messages) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{} {}", e.attribute, messages.text(e.kind)))
            .collect()
    }
}

/// A rule applied to a single attribute value during record validation.
pub trait EachValidator {
    fn validate_each(&self, errors: &mut Errors, attribute: &str, value: Option<&str>) -> Result<()>;
}

/// A record that can validate its own attributes.
pub trait Validatable {
    fn validate(&self) -> Result<Errors>;

    fn is_valid(&self) -> Result<bool> {
        Ok(self.validate()?.is_empty())
    }
}

/// Requires the attribute to be a usable read/write directory.
///
/// Absent and empty values are skipped. Only errors produced for this
/// attribute gate the subfolder pass; errors already on the record for other
/// attributes do not.
pub struct ReadWriteValidator<'a> {
    tracer: &'a dyn Tracer,
}

static NOOP: NoopTracer = NoopTracer;

impl Default for ReadWriteValidator<'static> {
    fn default() -> Self {
        Self { tracer: &NOOP }
    }
}

impl ReadWriteValidator<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> ReadWriteValidator<'a> {
    pub fn with_tracer<'b>(self, tracer: &'b dyn Tracer) -> ReadWriteValidator<'b> {
        ReadWriteValidator { tracer }
    }
}

impl EachValidator for ReadWriteValidator<'_> {
    fn validate_each(&self, errors: &mut Errors, attribute: &str, value: Option<&str>) -> Result<()> {
        let Some(path) = value else {
            return Ok(());
        };
        if !path.is_empty() {
            self.tracer.debug(&format!("attribute {}", attribute));
        }
        let kinds = DirectoryChecker::new()
            .with_tracer(self.tracer)
            .check(path)
            .with_context(|| format!("validate {}", attribute))?;
        for kind in kinds {
            errors.add(attribute, kind);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn test_errors_on_and_attributes() {
        let mut errors = Errors::new();
        errors.add("media_path", ErrorKind::NotADirectory);
        errors.add("download_path", ErrorKind::NotWritable);
        errors.add("media_path", ErrorKind::NotReadable);

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.on("media_path"),
            vec![ErrorKind::NotADirectory, ErrorKind::NotReadable]
        );
        assert!(errors.on("other").is_empty());
        assert_eq!(errors.attributes(), vec!["media_path", "download_path"]);
    }

    #[test]
    fn test_full_messages_use_defaults() {
        let mut errors = Errors::new();
        errors.add("media_path", ErrorKind::NotWritable);
        assert_eq!(
            errors.full_messages(&Messages::default()),
            vec!["media_path is not writable".to_string()]
        );
    }

    #[test]
    fn test_absent_value_adds_nothing() {
        let mut errors = Errors::new();
        ReadWriteValidator::new()
            .validate_each(&mut errors, "media_path", None)
            .unwrap();
        ReadWriteValidator::new()
            .validate_each(&mut errors, "media_path", Some(""))
            .unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_directory_tagged_with_attribute() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let mut errors = Errors::new();
        ReadWriteValidator::new()
            .validate_each(&mut errors, "media_path", Some(path_str(&missing)))
            .unwrap();
        assert_eq!(errors.attributes(), vec!["media_path"]);
        assert_eq!(errors.on("media_path")[0], ErrorKind::NotADirectory);
    }

    #[test]
    fn test_prior_errors_do_not_gate_subfolder_pass() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut errors = Errors::new();
        errors.add("other_path", ErrorKind::NotADirectory);
        ReadWriteValidator::new()
            .validate_each(&mut errors, "media_path", Some(path_str(dir.path())))
            .unwrap();
        assert!(errors.on("media_path").is_empty());
        assert_eq!(errors.len(), 1);
    }
}
