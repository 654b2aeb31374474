//! Data structures.

pub mod error_kind;
pub mod settings;
