//! Read/write directory usability checks.
//!
//! Verifies that a path is an existing directory the current process can
//! read and write, and that every immediate child entry is readable and
//! writable as well. Failures are reported as typed error codes on a
//! validated record rather than raised.
//!
//! ## Modules
//! - `cli` — Operator harness (`check`, `validate`)
//! - `core` — Checker, record validation, message lookup, settings loading
//! - `models` — Data structures (error kinds, settings file)
//! - `util` — System utilities (access predicates, privilege, tracing)

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
