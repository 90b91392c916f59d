use serde::{Deserialize, Serialize};

/// One file and its size, produced by a size lookup.
///
/// `path` is rendered with `Path::display`, so non-UTF-8 names are replaced
/// lossily and may not reopen the original file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub size: u64,
}

/// A record tagged with the position its path had in the walk.
///
/// Results come back from the workers in completion order; the index is what
/// lets callers recover discovery order (e.g. to break size ties).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedRecord {
    pub index: usize,
    pub record: FileRecord,
}
