use std::path::Path;

/// Size of the file at `path` in bytes, following symlinks.
///
/// Any failure (vanished file, permission denied, dangling link) reads as 0 so
/// a single bad file never aborts a scan.
pub fn size_of(path: &Path) -> u64 {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            log::trace!("size lookup failed for {}: {}", path.display(), e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_size_of_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        File::create(&path).unwrap().write_all(&[0u8; 1500]).unwrap();
        assert_eq!(size_of(&path), 1500);
    }

    #[test]
    fn test_missing_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(size_of(&dir.path().join("gone.txt")), 0);
    }

    #[test]
    fn test_file_removed_after_enumeration_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short-lived.txt");
        File::create(&path).unwrap().write_all(b"bye").unwrap();
        let listed = crate::enumerate(dir.path());
        std::fs::remove_file(&path).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(size_of(&listed[0]), 0);
    }
}
