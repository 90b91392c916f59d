pub mod error;
pub mod config;

pub use error::*;
pub use config::*;
