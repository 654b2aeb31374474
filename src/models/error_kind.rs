//! Error codes recorded against a directory attribute.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Path does not exist or is not a directory.
    NotADirectory,
    /// Process lacks read permission on the path.
    #[serde(rename = "non_readable")]
    NotReadable,
    /// Process lacks write permission on the path.
    #[serde(rename = "non_writable")]
    NotWritable,
    /// An immediate child entry lacks read permission.
    NonReadableSubfolder,
    /// An immediate child entry lacks write permission.
    NonWritableSubfolder,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::NotADirectory,
        ErrorKind::NotReadable,
        ErrorKind::NotWritable,
        ErrorKind::NonReadableSubfolder,
        ErrorKind::NonWritableSubfolder,
    ];

    /// Symbol name used to key message lookups.
    pub fn symbol(self) -> &'static str {
        match self {
            ErrorKind::NotADirectory => "not_a_directory",
            ErrorKind::NotReadable => "non_readable",
            ErrorKind::NotWritable => "non_writable",
            ErrorKind::NonReadableSubfolder => "non_readable_subfolder",
            ErrorKind::NonWritableSubfolder => "non_writable_subfolder",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.symbol() == symbol)
    }

    /// Built-in message text, used when no override is configured.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::NotADirectory => "is not a directory",
            ErrorKind::NotReadable => "is not readable",
            ErrorKind::NotWritable => "is not writable",
            ErrorKind::NonReadableSubfolder => "contains entries that are not readable",
            ErrorKind::NonWritableSubfolder => "contains entries that are not writable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
