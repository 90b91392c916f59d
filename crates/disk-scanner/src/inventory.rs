//! Query dispatchers built on the walker and the aggregator.
//!
//! Every query resolves its root, runs a count-only walk to give progress a
//! total, then does its own fresh walk. Nothing is cached between queries.

use std::path::{Path, PathBuf};
use std::time::Instant;

use fsinv_common::{AppConfig, InventoryError};
use fsinv_domain::{AggregateStat, TopFileEntry};

use crate::aggregator::SizeAggregator;
use crate::progress::ProgressObserver;
use crate::root::resolve_root;
use crate::size::size_of;
use crate::walker::{count_files, walk};

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    config: AppConfig,
    aggregator: SizeAggregator,
}

impl Inventory {
    pub fn new(config: AppConfig) -> Self {
        let aggregator = SizeAggregator::from_config(&config);
        Self { config, aggregator }
    }

    pub fn global_root(&self) -> &Path {
        &self.config.global_root
    }

    /// Count and total size of every file under `root`.
    pub fn total_stats(
        &self,
        root: &Path,
        progress: &dyn ProgressObserver,
    ) -> Result<AggregateStat, InventoryError> {
        self.run("total", root, progress, |root| {
            self.aggregator.total(walk(root), progress)
        })
    }

    pub fn total_stats_global(
        &self,
        progress: &dyn ProgressObserver,
    ) -> Result<AggregateStat, InventoryError> {
        self.total_stats(self.global_root(), progress)
    }

    /// Count and total size of files whose name ends with `suffix`.
    ///
    /// The match is exact and case-sensitive; callers pass the dot themselves
    /// (".pdf"). A file is counted as soon as its name matches, before its
    /// size is read, so one that vanishes in between still adds to `count`
    /// but contributes 0 bytes.
    pub fn extension_stats(
        &self,
        root: &Path,
        suffix: &str,
        progress: &dyn ProgressObserver,
    ) -> Result<AggregateStat, InventoryError> {
        self.run("extension", root, progress, |root| {
            let mut stat = AggregateStat::new();
            for path in walk(root) {
                if file_name_matches(&path, |name| name.ends_with(suffix)) {
                    stat.add(size_of(&path));
                }
                progress.advance(1);
            }
            Ok(stat)
        })
    }

    pub fn extension_stats_global(
        &self,
        suffix: &str,
        progress: &dyn ProgressObserver,
    ) -> Result<AggregateStat, InventoryError> {
        self.extension_stats(self.global_root(), suffix, progress)
    }

    /// Full paths of files whose name contains `needle` (case-sensitive), in
    /// walk order.
    pub fn find_by_name(
        &self,
        root: &Path,
        needle: &str,
        progress: &dyn ProgressObserver,
    ) -> Result<Vec<String>, InventoryError> {
        self.run("name", root, progress, |root| {
            let mut matches = Vec::new();
            for path in walk(root) {
                if file_name_matches(&path, |name| name.contains(needle)) {
                    matches.push(path.display().to_string());
                }
                progress.advance(1);
            }
            Ok(matches)
        })
    }

    /// The `top_n` largest files under `root`, largest first.
    pub fn largest_files(
        &self,
        root: &Path,
        progress: &dyn ProgressObserver,
    ) -> Result<Vec<TopFileEntry>, InventoryError> {
        let n = self.config.top_n;
        self.run("largest", root, progress, |root| {
            self.aggregator.largest(walk(root), n, progress)
        })
    }

    fn run<T, F>(
        &self,
        query: &str,
        root: &Path,
        progress: &dyn ProgressObserver,
        body: F,
    ) -> Result<T, InventoryError>
    where
        F: FnOnce(PathBuf) -> Result<T, InventoryError>,
    {
        let result = (|| -> Result<T, InventoryError> {
            let root = resolve_root(root)?;
            let start = Instant::now();
            let total = count_files(&root);
            progress.set_total(total);
            log::info!("{} query: {} files under {}", query, total, root.display());

            let out = body(root)?;
            log::info!("{} query done in {} ms", query, start.elapsed().as_millis());
            Ok(out)
        })();
        progress.finish();
        result
    }
}

fn file_name_matches<F>(path: &Path, pred: F) -> bool
where
    F: Fn(&str) -> bool,
{
    path.file_name()
        .map(|name| pred(&name.to_string_lossy()))
        .unwrap_or(false)
}
