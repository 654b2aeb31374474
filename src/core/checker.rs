//! Read/write directory usability check.
//!
//! A path passes when it is a directory the current process can read and
//! write and every immediate child entry is readable and writable. The
//! top-level predicates are evaluated independently; the child pass only runs
//! when the path exists and none of them failed.

use crate::models::error_kind::ErrorKind;
use crate::util::access::{FsProbe, SystemProbe};
use crate::util::trace::{NoopTracer, Tracer};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

static NOOP: NoopTracer = NoopTracer;
static SYSTEM: SystemProbe = SystemProbe;

/// Filesystem failure that prevented the check from completing.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("list directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check `path` without diagnostic tracing.
pub fn check(path: &str) -> Result<Vec<ErrorKind>, CheckError> {
    DirectoryChecker::new().check(path)
}

/// Check an optional value; `None` is skipped like an empty path.
pub fn check_optional(path: Option<&str>) -> Result<Vec<ErrorKind>, CheckError> {
    match path {
        Some(p) => check(p),
        None => Ok(Vec::new()),
    }
}

pub struct DirectoryChecker<'a> {
    tracer: &'a dyn Tracer,
    probe: &'a dyn FsProbe,
}

impl Default for DirectoryChecker<'static> {
    fn default() -> Self {
        Self {
            tracer: &NOOP,
            probe: &SYSTEM,
        }
    }
}

impl DirectoryChecker<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> DirectoryChecker<'a> {
    pub fn with_tracer<'b>(self, tracer: &'b dyn Tracer) -> DirectoryChecker<'b>
    where
        'a: 'b,
    {
        DirectoryChecker {
            tracer,
            probe: self.probe,
        }
    }

    /// Replace the filesystem the checks run against.
    pub fn with_probe<'b>(self, probe: &'b dyn FsProbe) -> DirectoryChecker<'b>
    where
        'a: 'b,
    {
        DirectoryChecker {
            tracer: self.tracer,
            probe,
        }
    }

    /// Run every check against `path` and return the failures in check order.
    ///
    /// An empty path is skipped and yields no errors.
    pub fn check(&self, path: &str) -> Result<Vec<ErrorKind>, CheckError> {
        if path.is_empty() {
            return Ok(Vec::new());
        }
        let root = Path::new(path);
        let mut errors = Vec::new();
        self.trace(format!("validating {}", root.display()));

        if self.probe.is_dir(root) {
            self.trace("is a directory".to_string());
        } else {
            self.trace(format!("not a directory: {}", root.display()));
            errors.push(ErrorKind::NotADirectory);
        }

        if self.probe.is_readable(root) {
            self.trace("is readable".to_string());
        } else {
            self.trace(format!("not readable: {}", root.display()));
            errors.push(ErrorKind::NotReadable);
        }

        if self.probe.is_writable(root) {
            self.trace("is writable".to_string());
        } else {
            self.trace(format!("not writable: {}", root.display()));
            errors.push(ErrorKind::NotWritable);
        }

        if self.probe.exists(root) && errors.is_empty() {
            self.check_entries(root, &mut errors)?;
        }

        Ok(errors)
    }

    fn check_entries(&self, root: &Path, errors: &mut Vec<ErrorKind>) -> Result<(), CheckError> {
        self.trace("checking subfolders".to_string());
        let entries = self
            .probe
            .list_dir(root)
            .map_err(|source| CheckError::ListDir {
                path: root.to_path_buf(),
                source,
            })?;
        self.trace(format!("found {} subfolders", entries.len()));

        let before = errors.len();
        for child in &entries {
            if !self.probe.is_readable(child) {
                self.trace(format!("subfolder not readable: {}", child.display()));
                errors.push(ErrorKind::NonReadableSubfolder);
            }
            if !self.probe.is_writable(child) {
                self.trace(format!("subfolder not writable: {}", child.display()));
                errors.push(ErrorKind::NonWritableSubfolder);
            }
        }

        if errors.len() == before {
            self.trace("all subfolders are readable and writable".to_string());
        }
        Ok(())
    }

    fn trace(&self, message: String) {
        self.tracer.debug(&message);
    }
}
