//! Item inventory: validated per-size item counts

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::{CARTON_CAPACITY, MAX_ITEM_SIZE, MIN_ITEM_SIZE};

/// Number of items per size, indexed by size.
///
/// Sizes 1..=10 are always present. Index 0 is unused; size 10 is
/// representable but never produced by single-digit input. Counts only
/// decrease once packing starts, and never below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: [usize; CARTON_CAPACITY + 1],
}

impl Inventory {
    /// Parse a string of single-digit item sizes into per-size counts.
    ///
    /// Scans left to right and fails on the first character that is not a
    /// digit in [1,9]. The empty string is a valid, empty inventory.
    pub fn parse(input: &str) -> Result<Self> {
        let mut counts = [0usize; CARTON_CAPACITY + 1];

        for ch in input.chars() {
            let size = ch.to_digit(10).ok_or(Error::InvalidSizeFormat(ch))? as usize;
            if !(MIN_ITEM_SIZE..=MAX_ITEM_SIZE).contains(&size) {
                return Err(Error::SizeOutOfRange {
                    found: size,
                    min: MIN_ITEM_SIZE,
                    max: MAX_ITEM_SIZE,
                });
            }
            counts[size] += 1;
        }

        Ok(Self { counts })
    }

    /// Items of `size` still available.
    pub fn count(&self, size: usize) -> usize {
        self.counts[size]
    }

    /// Total items across all sizes.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Remove `n` items of `size`. Callers never take more than `count(size)`.
    pub(crate) fn take(&mut self, size: usize, n: usize) {
        debug_assert!(n <= self.counts[size]);
        self.counts[size] -= n;
    }
}
