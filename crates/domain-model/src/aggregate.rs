use serde::{Deserialize, Serialize};

use crate::format_size;

/// File count and byte total of a set of files.
///
/// `add` and `merge` are associative and commutative, so records can be
/// folded in whatever order the workers finish them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStat {
    pub count: u64,
    pub total_bytes: u64,
}

impl AggregateStat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one file of `size` bytes.
    pub fn add(&mut self, size: u64) {
        self.count += 1;
        self.total_bytes = self.total_bytes.saturating_add(size);
    }

    pub fn merge(mut self, other: AggregateStat) -> AggregateStat {
        self.count += other.count;
        self.total_bytes = self.total_bytes.saturating_add(other.total_bytes);
        self
    }

    /// `total_bytes` rendered with [`format_size`].
    pub fn readable_size(&self) -> String {
        format_size(self.total_bytes)
    }
}

impl FromIterator<u64> for AggregateStat {
    fn from_iter<I: IntoIterator<Item = u64>>(sizes: I) -> Self {
        let mut stat = AggregateStat::new();
        for size in sizes {
            stat.add(size);
        }
        stat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_zero() {
        let stat = AggregateStat::new();
        assert_eq!(stat.count, 0);
        assert_eq!(stat.total_bytes, 0);
        assert_eq!(stat.readable_size(), "0 B");
    }

    #[test]
    fn test_zero_sized_file_still_counts() {
        let mut stat = AggregateStat::new();
        stat.add(0);
        assert_eq!(stat, AggregateStat { count: 1, total_bytes: 0 });
    }

    #[test]
    fn test_total_saturates() {
        let mut stat = AggregateStat::new();
        stat.add(u64::MAX);
        stat.add(10);
        assert_eq!(stat.count, 2);
        assert_eq!(stat.total_bytes, u64::MAX);
    }

    #[test]
    fn test_serializes_field_names() {
        let json = serde_json::to_string(&AggregateStat { count: 2, total_bytes: 7 }).unwrap();
        assert_eq!(json, r#"{"count":2,"total_bytes":7}"#);
    }

    proptest! {
        #[test]
        fn fold_ignores_processing_order(
            sizes in prop::collection::vec(0u64..1 << 40, 0..64),
            seed in any::<u64>(),
        ) {
            let forward: AggregateStat = sizes.iter().copied().collect();

            // Deterministic shuffle driven by the seed.
            let mut shuffled = sizes.clone();
            let mut state = seed | 1;
            for i in (1..shuffled.len()).rev() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let j = (state % (i as u64 + 1)) as usize;
                shuffled.swap(i, j);
            }
            let permuted: AggregateStat = shuffled.iter().copied().collect();

            prop_assert_eq!(forward, permuted);
        }

        #[test]
        fn merge_of_halves_equals_whole(
            sizes in prop::collection::vec(0u64..1 << 40, 0..64),
            split in 0usize..64,
        ) {
            let split = split.min(sizes.len());
            let whole: AggregateStat = sizes.iter().copied().collect();
            let left: AggregateStat = sizes[..split].iter().copied().collect();
            let right: AggregateStat = sizes[split..].iter().copied().collect();

            prop_assert_eq!(right.merge(left), whole);
            prop_assert_eq!(left.merge(right), whole);
        }
    }
}
