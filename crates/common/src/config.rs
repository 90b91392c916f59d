use std::path::PathBuf;

use crate::InventoryError;

pub const ENV_ROOT: &str = "FSINV_ROOT";
pub const ENV_WORKERS: &str = "FSINV_WORKERS";
pub const ENV_QUEUE_CAPACITY: &str = "FSINV_QUEUE_CAPACITY";

pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;
pub const DEFAULT_TOP_N: usize = 10;

/// Runtime configuration shared by the scanner and the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root used by the "whole system" queries.
    pub global_root: PathBuf,
    /// Size-lookup workers; `None` means one per logical processor.
    pub workers: Option<usize>,
    /// Slots in the bounded result channel between workers and the fold.
    pub queue_capacity: usize,
    pub top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            global_root: default_global_root(),
            workers: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `FSINV_ROOT`, `FSINV_WORKERS` and `FSINV_QUEUE_CAPACITY`.
    pub fn from_env() -> Result<Self, InventoryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, InventoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(root) = non_empty(lookup(ENV_ROOT)) {
            config.global_root = PathBuf::from(root);
        }
        if let Some(raw) = non_empty(lookup(ENV_WORKERS)) {
            config.workers = Some(parse_positive(ENV_WORKERS, &raw)?);
        }
        if let Some(raw) = non_empty(lookup(ENV_QUEUE_CAPACITY)) {
            config.queue_capacity = parse_positive(ENV_QUEUE_CAPACITY, &raw)?;
        }

        Ok(config)
    }

    /// Worker count actually used for a pool.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1)
        })
    }
}

fn default_global_root() -> PathBuf {
    #[cfg(windows)]
    let root = PathBuf::from("C:\\");
    #[cfg(not(windows))]
    let root = PathBuf::from("/");
    root
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, InventoryError> {
    match raw.parse::<usize>() {
        Ok(0) => Err(InventoryError::Config(format!("{} must be greater than zero", key))),
        Ok(n) => Ok(n),
        Err(e) => Err(InventoryError::Config(format!("{}={:?}: {}", key, raw, e))),
    }
}
