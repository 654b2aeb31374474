//! Privilege checks.

/// Check if the current process is running as root (euid 0).
///
/// Root passes every read/write permission query while its euid stays 0.
pub fn is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

