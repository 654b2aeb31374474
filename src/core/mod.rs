//! Core check and validation logic.

pub mod checker;
pub mod messages;
pub mod settings;
pub mod validation;
