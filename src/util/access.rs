//! Permission predicates scoped to the current process credentials.
//!
//! Read/write queries use the effective uid/gid (`AT_EACCESS`), so a process
//! that dropped privileges with `seteuid` is judged by what it can do now.

use nix::fcntl::AtFlags;
use nix::unistd::{faccessat, AccessFlags};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait PathAccess {
    fn is_readable(&self) -> bool;
    fn is_writable(&self) -> bool;
}

impl PathAccess for Path {
    fn is_readable(&self) -> bool {
        faccessat(None, self, AccessFlags::R_OK, AtFlags::AT_EACCESS).is_ok()
    }

    fn is_writable(&self) -> bool {
        faccessat(None, self, AccessFlags::W_OK, AtFlags::AT_EACCESS).is_ok()
    }
}

/// Filesystem queries the directory checker depends on.
pub trait FsProbe {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn is_readable(&self, path: &Path) -> bool;
    fn is_writable(&self, path: &Path) -> bool;
    /// Immediate entries of `path`, without `.` and `..`, in listing order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// The real filesystem, queried under the process credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl FsProbe for SystemProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_readable(&self, path: &Path) -> bool {
        path.is_readable()
    }

    fn is_writable(&self, path: &Path) -> bool {
        path.is_writable()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::privilege;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn test_tempdir_is_readable_and_writable() {
        let dir = TempDir::new().unwrap();
        assert!(dir.path().is_readable());
        assert!(dir.path().is_writable());
    }

    #[test]
    fn test_missing_path_is_neither() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(!missing.is_readable());
        assert!(!missing.is_writable());
    }

    #[test]
    fn test_read_only_file_writable_only_for_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("ro.txt");
        fs::write(&file, "x").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o400)).unwrap();
        assert!(file.is_readable());
        // euid 0 bypasses mode bits
        assert_eq!(file.is_writable(), privilege::is_root());
    }

    #[test]
    fn test_system_probe_lists_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();
        let mut entries = SystemProbe.list_dir(dir.path()).unwrap();
        entries.sort();
        assert_eq!(
            entries,
            vec![dir.path().join("file.txt"), dir.path().join("sub")]
        );
    }

    #[test]
    fn test_system_probe_list_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let err = SystemProbe.list_dir(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
