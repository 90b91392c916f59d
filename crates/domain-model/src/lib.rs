pub mod file_record;
pub mod aggregate;
pub mod top_file_entry;
pub mod size_format;

pub use file_record::*;
pub use aggregate::*;
pub use top_file_entry::*;
pub use size_format::*;
