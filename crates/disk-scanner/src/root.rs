use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fsinv_common::InventoryError;

/// Normalizes user input: trims whitespace, accepts forward slashes on Windows.
pub fn normalize_path(path: &str) -> PathBuf {
    let s = path.trim();
    #[cfg(windows)]
    let s = s.replace('/', "\\");
    PathBuf::from(s)
}

/// Resolves a query root to an absolute, canonical directory.
///
/// A missing root, a root that is not a directory, or one that can't be listed
/// is reported instead of producing an empty result.
pub fn resolve_root(path: &Path) -> Result<PathBuf, InventoryError> {
    let shown = path.display().to_string();
    if shown.trim().is_empty() {
        return Err(InventoryError::InvalidPath("empty path".to_string()));
    }

    let canonical = std::fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InventoryError::InvalidPath(format!("path does not exist: {}", shown)),
        ErrorKind::PermissionDenied => InventoryError::PermissionDenied(shown.clone()),
        _ => InventoryError::InvalidPath(format!("cannot resolve {}: {}", shown, e)),
    })?;

    if !canonical.is_dir() {
        return Err(InventoryError::NotADirectory(canonical.display().to_string()));
    }

    std::fs::read_dir(&canonical).map_err(|e| {
        if e.kind() == ErrorKind::PermissionDenied {
            InventoryError::PermissionDenied(canonical.display().to_string())
        } else {
            InventoryError::InvalidPath(format!("cannot list {}: {}", canonical.display(), e))
        }
    })?;

    Ok(canonical)
}
