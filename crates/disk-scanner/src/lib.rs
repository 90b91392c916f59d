pub mod walker;
pub mod size;
pub mod progress;
pub mod aggregator;
pub mod top_files;
pub mod root;
pub mod inventory;

pub use walker::{count_files, enumerate, walk, FileWalker};
pub use size::size_of;
pub use progress::*;
pub use aggregator::SizeAggregator;
pub use top_files::{TopFiles, TOP_FILES_DEFAULT_N};
pub use root::{normalize_path, resolve_root};
pub use inventory::Inventory;
pub use fsinv_domain::{AggregateStat, FileRecord, IndexedRecord, TopFileEntry, format_size};
