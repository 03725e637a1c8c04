//! Locked atomic file writes
//!
//! Shared by the config file and the JSON progress store. The writer takes an
//! exclusive lock on a `<name>.lock` sidecar, writes `<name>.tmp`, syncs it
//! and renames it over the target, so readers only ever see a whole file.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// `path` with `suffix` appended to its file name (`config.toml` -> `config.toml.lock`)
fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Replace `path` with `content` under an exclusive lock via temp file + rename.
///
/// Missing parent directories are created.
pub fn write_locked(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Lock a separate file; the target itself is replaced by the rename
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(sidecar(path, ".lock"))?;
    lock_file.lock_exclusive()?;

    let temp_path = sidecar(path, ".tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)?;

    // Lock is released when lock_file is dropped
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sidecar_keeps_extension() {
        let path = Path::new("/tmp/hq/progress.json");
        assert_eq!(sidecar(path, ".tmp"), Path::new("/tmp/hq/progress.json.tmp"));
        assert_eq!(sidecar(path, ".lock"), Path::new("/tmp/hq/progress.json.lock"));
    }

    #[test]
    fn test_write_creates_dirs_and_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/config.toml");

        write_locked(&path, b"first").unwrap();
        write_locked(&path, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!sidecar(&path, ".tmp").exists());
        assert!(sidecar(&path, ".lock").exists());
    }
}
