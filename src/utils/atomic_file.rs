//! Whole-file replacement that never exposes a half-written file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `path`, replacing any existing file in one rename.
///
/// The data goes to a temporary file in the destination directory first, so
/// a failed write leaves the previous file (or no file) in place.
///
/// # Arguments
/// * `path` - The target path for the file
/// * `contents` - The bytes to write
///
/// # Example
/// ```rust,no_run
/// use sinsweep::utils::atomic_file::write_atomic;
/// use std::path::Path;
///
/// write_atomic(Path::new("results.xml"), b"<results/>\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp_file = NamedTempFile::new_in(parent)?;

    temp_file.write_all(contents)?;
    temp_file.as_file().sync_all()?;

    // Temporary files are created owner-only; results are ordinary files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp_file.path(), fs::Permissions::from_mode(0o644))?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
