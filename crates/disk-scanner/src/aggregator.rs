//! Parallel size lookup and fold.
//!
//! Paths are pulled lazily by a per-call rayon pool, each worker stats one
//! file and sends the record through a bounded channel. The calling thread is
//! the only consumer: it advances progress and feeds the fold, so the running
//! totals never need a lock. When the fold falls behind, workers block on the
//! channel and stop pulling paths, which caps memory independently of the size
//! of the tree.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use fsinv_common::{AppConfig, InventoryError};
use fsinv_domain::{AggregateStat, FileRecord, IndexedRecord, TopFileEntry};
use rayon::prelude::*;

use crate::progress::ProgressObserver;
use crate::size::size_of;
use crate::top_files::TopFiles;

#[derive(Debug, Clone)]
pub struct SizeAggregator {
    workers: usize,
    queue_capacity: usize,
}

impl Default for SizeAggregator {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl SizeAggregator {
    /// Zero workers or a zero-slot queue are raised to one.
    pub fn new(workers: usize, queue_capacity: usize) -> Self {
        Self {
            workers: workers.max(1),
            queue_capacity: queue_capacity.max(1),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.worker_count(), config.queue_capacity)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    fn build_pool(&self) -> Result<rayon::ThreadPool, InventoryError> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("fsinv-size-{}", i))
            .build()
            .map_err(|e| InventoryError::WorkerPool(e.to_string()))
    }

    /// Looks up the size of every path and hands each record to `sink` in
    /// completion order. Progress advances by one per record.
    ///
    /// The pool lives only for the duration of this call.
    pub fn for_each_record<I, F>(
        &self,
        paths: I,
        progress: &dyn ProgressObserver,
        mut sink: F,
    ) -> Result<(), InventoryError>
    where
        I: IntoIterator<Item = PathBuf>,
        I::IntoIter: Send,
        F: FnMut(IndexedRecord),
    {
        let pool = self.build_pool()?;
        let (tx, rx) = mpsc::sync_channel::<IndexedRecord>(self.queue_capacity);
        let paths = paths.into_iter().enumerate();

        thread::scope(|scope| {
            scope.spawn(move || {
                pool.install(move || {
                    paths.par_bridge().for_each_with(tx, |tx, (index, path)| {
                        let size = size_of(&path);
                        let record = FileRecord {
                            path: path.display().to_string(),
                            size,
                        };
                        // Send only fails once the consumer is gone.
                        let _ = tx.send(IndexedRecord { index, record });
                    });
                });
            });

            for indexed in rx {
                progress.advance(1);
                sink(indexed);
            }
        });

        Ok(())
    }

    /// Count and byte total of `paths`.
    pub fn total<I>(
        &self,
        paths: I,
        progress: &dyn ProgressObserver,
    ) -> Result<AggregateStat, InventoryError>
    where
        I: IntoIterator<Item = PathBuf>,
        I::IntoIter: Send,
    {
        let mut stat = AggregateStat::new();
        self.for_each_record(paths, progress, |indexed| stat.add(indexed.record.size))?;
        Ok(stat)
    }

    /// The `n` largest files of `paths`, largest first, ties in input order.
    pub fn largest<I>(
        &self,
        paths: I,
        n: usize,
        progress: &dyn ProgressObserver,
    ) -> Result<Vec<TopFileEntry>, InventoryError>
    where
        I: IntoIterator<Item = PathBuf>,
        I::IntoIter: Send,
    {
        let mut top = TopFiles::new(n);
        self.for_each_record(paths, progress, |indexed| top.offer(indexed))?;
        Ok(top.into_sorted())
    }
}
