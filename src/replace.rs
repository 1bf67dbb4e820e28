//! Atomic file replacement.
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Writes `contents` to `path` through a temporary file in the same
/// directory, then renames it over `path`. Readers see either the old file or
/// the complete new one. The temporary file is removed on every error path.
///
/// An existing file keeps its permissions; a new file gets mode 0644 on Unix.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> std::io::Result<()> {
    let path = path.as_ref();
    let dir = parent_dir(path);
    let mut tmp = tempfile::Builder::new()
        .prefix(".")
        .suffix(".tmp")
        .tempfile_in(&dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    update_permissions(tmp.as_file(), path)?;
    tmp.persist(path)?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
        _ => PathBuf::from("."),
    }
}

#[cfg(not(unix))]
fn update_permissions(file: &std::fs::File, target: &Path) -> std::io::Result<()> {
    if let Ok(metadata) = std::fs::metadata(target) {
        file.set_permissions(metadata.permissions())?;
    }
    Ok(())
}

#[cfg(unix)]
fn update_permissions(file: &std::fs::File, target: &Path) -> std::io::Result<()> {
    use std::{fs::Permissions, os::unix::fs::PermissionsExt};
    let permissions = match std::fs::metadata(target) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => Permissions::from_mode(0o644),
    };
    file.set_permissions(permissions)
}
