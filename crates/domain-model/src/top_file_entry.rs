use serde::{Deserialize, Serialize};

/// Entry of a largest-files listing, sorted by size descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopFileEntry {
    pub path: String,
    pub size: u64,
}

impl From<crate::FileRecord> for TopFileEntry {
    fn from(record: crate::FileRecord) -> Self {
        Self {
            path: record.path,
            size: record.size,
        }
    }
}
