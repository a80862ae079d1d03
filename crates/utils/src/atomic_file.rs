//! Atomic file operations so a failed run never leaves a truncated output file

use ssm2dotenv_core::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Write data to a file atomically by writing to a temporary file and renaming,
/// then set the permission bits of the final file.
///
/// The mode is applied explicitly after writing so the process umask does not
/// narrow it. On non-Unix platforms the mode is ignored.
pub fn write_atomic_with_mode(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::output_write(
            path,
            "resolve parent directory of",
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent"),
        )
    })?;

    fs::create_dir_all(parent)
        .map_err(|e| Error::output_write(parent, "create parent directory for", e))?;

    // Same directory as the target so the rename stays on one filesystem
    let temp_name = format!(".{}.tmp", Uuid::new_v4());
    let temp_path = parent.join(&temp_name);

    let result = (|| -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::output_write(&temp_path, "create temporary", e))?;

        file.write_all(content)
            .map_err(|e| Error::output_write(&temp_path, "write temporary", e))?;

        file.sync_all()
            .map_err(|e| Error::output_write(&temp_path, "sync temporary", e))?;

        set_mode(&temp_path, mode)?;

        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
        return result;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::output_write(path, "rename temporary file onto", e)
    })?;

    Ok(())
}

/// Write string content to a file atomically
pub fn write_atomic_string(path: &Path, content: &str, mode: u32) -> Result<()> {
    write_atomic_with_mode(path, content.as_bytes(), mode)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| Error::output_write(path, "set permissions on", e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
