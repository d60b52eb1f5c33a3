//! Backup, overwrite and restore of individual documents.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

const TEMP_SUFFIX: &str = ".demoji.tmp";

/// Read a document's raw bytes.
pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

/// Interpret document bytes as UTF-8 text.
pub fn decode_utf8<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).with_context(|| format!("decode {} as UTF-8", path.display()))
}

/// `<path><suffix>`, e.g. `README.md` -> `README.md.backup`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    append_to_name(path, suffix)
}

/// Write `original` verbatim next to `path` and return the backup location.
pub fn write_backup(path: &Path, original: &[u8], suffix: &str) -> Result<PathBuf> {
    let backup = backup_path(path, suffix);
    fs::write(&backup, original).with_context(|| format!("write backup {}", backup.display()))?;
    Ok(backup)
}

/// Replace `path` with `contents` (temp file + rename), keeping its permissions.
///
/// Symlinks are followed: the link's target is replaced and the link survives.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path).with_context(|| format!("resolve {}", path.display()))?;
    let tmp_path = append_to_name(&target, TEMP_SUFFIX);
    let permissions = fs::metadata(&target)
        .with_context(|| format!("stat {}", target.display()))?
        .permissions();
    let replaced = fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))
        .and_then(|()| {
            fs::set_permissions(&tmp_path, permissions)
                .with_context(|| format!("copy permissions to {}", tmp_path.display()))
        })
        .and_then(|()| {
            fs::rename(&tmp_path, &target)
                .with_context(|| format!("replace {}", target.display()))
        });
    if let Err(err) = replaced {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

/// Rename `<doc><suffix>` back to `<doc>` and return the restored path.
pub fn restore_backup(backup: &Path, suffix: &str) -> Result<PathBuf> {
    let original = original_path(backup, suffix)?;
    fs::rename(backup, &original)
        .with_context(|| format!("rename {} to {}", backup.display(), original.display()))?;
    Ok(original)
}

/// Strip `suffix` from a backup's file name.
pub fn original_path(backup: &Path, suffix: &str) -> Result<PathBuf> {
    let name = backup
        .file_name()
        .ok_or_else(|| anyhow!("backup path has no file name: {}", backup.display()))?;
    let stem = strip_name_suffix(name, suffix)
        .ok_or_else(|| anyhow!("{} does not end with {}", backup.display(), suffix))?;
    Ok(backup.with_file_name(stem))
}

#[cfg(unix)]
fn strip_name_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;

    name.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .filter(|stem| !stem.is_empty())
        .map(|stem| OsStr::from_bytes(stem).to_os_string())
}

#[cfg(not(unix))]
fn strip_name_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    name.to_str()?
        .strip_suffix(suffix)
        .filter(|stem| !stem.is_empty())
        .map(OsString::from)
}

fn append_to_name(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
