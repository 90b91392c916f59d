//! Recursive file enumeration.
//!
//! The walk is depth-first, directory by directory: all files of a directory
//! are yielded before any of its subdirectories is entered. Sibling order is
//! whatever `read_dir` returns and is not stable across runs or filesystems.
//!
//! Symlinks to directories are neither yielded nor descended into, so a link
//! pointing back up the tree can't loop the walk. Loops made with bind mounts
//! are not detected.

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

/// Lazy iterator over every file path below a root.
///
/// Unreadable directories and entries are skipped; their subtree simply
/// contributes nothing.
pub struct FileWalker {
    /// Directories still to be listed, top of stack is listed next.
    pending: Vec<PathBuf>,
    /// Listing in progress and the subdirectories found in it so far.
    current: Option<(ReadDir, Vec<PathBuf>)>,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            pending: vec![root.into()],
            current: None,
        }
    }

    fn open_next_dir(&mut self) -> bool {
        while let Some(dir) = self.pending.pop() {
            match fs::read_dir(&dir) {
                Ok(entries) => {
                    self.current = Some((entries, Vec::new()));
                    return true;
                }
                Err(e) => {
                    log::debug!("skipping unreadable directory {}: {}", dir.display(), e);
                }
            }
        }
        false
    }
}

impl Iterator for FileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let Some((entries, subdirs)) = self.current.as_mut() else {
                if self.open_next_dir() {
                    continue;
                }
                return None;
            };

            match entries.next() {
                Some(Ok(entry)) => {
                    let path = entry.path();
                    match classify(&entry) {
                        EntryKind::Dir => subdirs.push(path),
                        EntryKind::File => return Some(path),
                        EntryKind::Skip => {}
                    }
                }
                Some(Err(e)) => {
                    log::debug!("skipping unreadable entry: {}", e);
                }
                None => {
                    // Listing done: queue its subdirectories so the first one
                    // found is walked first.
                    let subdirs = std::mem::take(subdirs);
                    self.current = None;
                    self.pending.extend(subdirs.into_iter().rev());
                }
            }
        }
    }
}

enum EntryKind {
    Dir,
    File,
    Skip,
}

fn classify(entry: &fs::DirEntry) -> EntryKind {
    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(e) => {
            log::debug!("skipping {}: {}", entry.path().display(), e);
            return EntryKind::Skip;
        }
    };

    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_symlink() {
        // Dangling links count as files; links to directories are not followed.
        match fs::metadata(entry.path()) {
            Ok(target) if target.is_dir() => EntryKind::Skip,
            _ => EntryKind::File,
        }
    } else {
        EntryKind::File
    }
}

/// Starts a lazy walk below `root`.
pub fn walk(root: impl Into<PathBuf>) -> FileWalker {
    FileWalker::new(root)
}

/// Every file path below `root`, in walk order.
pub fn enumerate(root: &Path) -> Vec<PathBuf> {
    walk(root).collect()
}

/// Number of files below `root`.
///
/// An independent full walk, used only to size progress bars. It may disagree
/// with a later walk if the tree changes in between.
pub fn count_files(root: &Path) -> u64 {
    walk(root).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs::File;
    use std::io::Write;

    fn create_test_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        File::create(root.join("top.txt")).unwrap().write_all(b"top").unwrap();
        File::create(root.join("a/one.rs")).unwrap();
        File::create(root.join("a/b/two.rs")).unwrap();
        File::create(root.join("a/b/c/three.rs")).unwrap();
        File::create(root.join("a/b/c/four.md")).unwrap();
        dir
    }

    /// Independent recursive listing to compare the walker against.
    fn reference_walk(dir: &Path, out: &mut BTreeSet<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                reference_walk(&path, out);
            } else {
                out.insert(path);
            }
        }
    }

    #[test]
    fn test_enumerate_matches_reference_walk() {
        let dir = create_test_tree();
        let found: Vec<_> = enumerate(dir.path());
        let mut expected = BTreeSet::new();
        reference_walk(dir.path(), &mut expected);

        assert_eq!(found.len(), 5);
        assert_eq!(found.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn test_directories_are_not_yielded() {
        let dir = create_test_tree();
        assert!(walk(dir.path()).all(|p| !p.is_dir()));
    }

    #[test]
    fn test_files_of_a_directory_come_before_its_subdirectories() {
        let dir = create_test_tree();
        let found = enumerate(dir.path());
        let pos = |name: &str| found.iter().position(|p| p.ends_with(name)).unwrap();

        assert_eq!(pos("top.txt"), 0);
        assert!(pos("a/one.rs") < pos("a/b/two.rs"));
        assert!(pos("a/b/two.rs") < pos("a/b/c/three.rs"));
        assert!(pos("a/b/two.rs") < pos("a/b/c/four.md"));
    }

    #[test]
    fn test_count_files_agrees_with_enumerate() {
        let dir = create_test_tree();
        assert_eq!(count_files(dir.path()), enumerate(dir.path()).len() as u64);
    }

    #[test]
    fn test_empty_and_missing_roots_yield_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(count_files(dir.path()), 0);
        assert!(enumerate(&dir.path().join("missing")).is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_directory_symlink_cycle_is_not_followed() {
        let dir = create_test_tree();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("a/b/loop")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("top.txt"),
            dir.path().join("a/top-link.txt"),
        )
        .unwrap();

        let found = enumerate(dir.path());
        assert_eq!(found.len(), 6);
        assert!(found.iter().any(|p| p.ends_with("a/top-link.txt")));
        assert!(!found.iter().any(|p| p.ends_with("loop")));
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_symlink_counts_as_file() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling"))
            .unwrap();
        assert_eq!(enumerate(dir.path()), vec![dir.path().join("dangling")]);
    }
}
