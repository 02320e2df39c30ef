//! Size combinations: every way to fill a carton to a given level

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-increasing sequence of item sizes summing to one carton fill level.
///
/// Combinations are deduplicated as multisets at generation time: for a
/// fill level of 3 the only combinations are `3`, `21` and `111`.
/// Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    parts: Vec<usize>,
}

impl Combination {
    fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// Sizes in this combination, largest first.
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn sum(&self) -> usize {
        self.parts.iter().sum()
    }

    /// How many times `part` occurs in this combination.
    pub fn occurrences(&self, part: usize) -> usize {
        self.parts.iter().filter(|&&p| p == part).count()
    }

    /// Smallest part, if any. Parts are non-increasing, so it is the last.
    fn smallest(&self) -> Option<usize> {
        self.parts.last().copied()
    }

    fn extended(&self, part: usize) -> Self {
        let mut parts = self.parts.clone();
        parts.push(part);
        Self { parts }
    }
}

impl fmt::Display for Combination {
    /// Digits largest to smallest with no separator: `[8, 2]` prints as `82`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// All combinations for every fill level 0..=capacity, ranked.
///
/// Input-independent: for a fixed capacity the table comes out identical on
/// every build, so it is constructed once and shared read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationTable {
    buckets: Vec<Vec<Combination>>,
}

impl CombinationTable {
    /// Build the table bottom-up, then rank every bucket.
    ///
    /// Fill level 0 holds the single empty combination. Level `total` is
    /// formed by extending the combinations of `total - part` with `part`,
    /// for every part from 1 to `total`, keeping only extensions whose
    /// smallest recorded part is >= `part`. That filter is what makes parts
    /// non-increasing and kills permutation duplicates: `21` is generated,
    /// `12` never is.
    pub fn new(capacity: usize) -> Self {
        let mut buckets: Vec<Vec<Combination>> = Vec::with_capacity(capacity + 1);
        buckets.push(vec![Combination::empty()]);

        for total in 1..=capacity {
            let mut bucket = Vec::new();
            for part in 1..=total {
                for combination in &buckets[total - part] {
                    if combination.smallest().is_none_or(|smallest| smallest >= part) {
                        bucket.push(combination.extended(part));
                    }
                }
            }
            buckets.push(bucket);
        }

        for bucket in &mut buckets {
            // Fewest parts first: combinations holding the bulkiest items
            // must be attempted before ones made of small fillers. With
            // items "2222288888", trying 22222 before 82 strands every 8
            // alone and costs a sixth carton. Stable, so equal lengths keep
            // generation order.
            bucket.sort_by_key(Combination::part_count);
        }

        Self { buckets }
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Combinations whose parts sum exactly to `total`, ranked.
    pub fn for_sum(&self, total: usize) -> &[Combination] {
        &self.buckets[total]
    }
}
