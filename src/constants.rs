//! Centralized constants for configuration and logging.

/// Default settings file, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dircheck.toml";

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV: &str = "DIRCHECK_CONFIG";

/// Log target used by the diagnostic tracer.
pub const TRACE_TARGET: &str = "dircheck::checker";

/// Default log filter when `--verbose` is not given and `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter applied by `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";
