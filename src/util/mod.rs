//! Utility modules for filesystem access and diagnostics.

pub mod access;
pub mod privilege;
pub mod trace;
