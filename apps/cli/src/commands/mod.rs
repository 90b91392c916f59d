//! Menu commands. Each prompts for its inputs, runs one inventory query and
//! prints the result.

mod extension;
mod search;
mod stats;
mod top_files;

pub use top_files::render_chart;
