//! Bounded selection of the largest files.
//!
//! A min-heap holds at most `n` candidates, so memory stays O(n) however many
//! records stream through. Ranking is by size, then by discovery index (earlier
//! wins), which gives the same result as a stable descending sort of every
//! record truncated to `n`.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use fsinv_domain::{IndexedRecord, TopFileEntry};

pub const TOP_FILES_DEFAULT_N: usize = 10;

#[derive(Debug)]
struct Ranked(IndexedRecord);

impl Ranked {
    fn key(&self) -> (u64, Reverse<usize>) {
        (self.0.record.size, Reverse(self.0.index))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Collector keeping the `n` largest records offered to it.
#[derive(Debug)]
pub struct TopFiles {
    n: usize,
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl TopFiles {
    pub fn new(n: usize) -> Self {
        let cap = n.saturating_add(1).min(1_000_000);
        Self {
            n,
            heap: BinaryHeap::with_capacity(cap),
        }
    }

    pub fn offer(&mut self, record: IndexedRecord) {
        if self.n == 0 {
            return;
        }
        self.heap.push(Reverse(Ranked(record)));
        while self.heap.len() > self.n {
            self.heap.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest first; equal sizes in discovery order.
    pub fn into_sorted(self) -> Vec<TopFileEntry> {
        let mut ranked: Vec<Ranked> = self.heap.into_iter().map(|Reverse(r)| r).collect();
        ranked.sort_by(|a, b| b.cmp(a));
        ranked
            .into_iter()
            .map(|Ranked(indexed)| TopFileEntry::from(indexed.record))
            .collect()
    }
}
