//! Allocation loop: consume the inventory against ranked combinations

use serde::{Deserialize, Serialize};

use crate::combination::{Combination, CombinationTable};
use crate::inventory::Inventory;

/// One packing entry: `count` cartons, each holding `combination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedCarton {
    pub combination: Combination,
    pub count: usize,
}

/// The outcome of packing an inventory.
///
/// Entries keep processing order (fill level descending, then rank), which
/// fixes the render order and keeps output deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packing {
    entries: Vec<PackedCarton>,
}

impl Packing {
    pub fn entries(&self) -> &[PackedCarton] {
        &self.entries
    }

    /// Total number of cartons across all entries.
    pub fn carton_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pack the whole inventory into cartons.
///
/// Fill levels are attempted from the capacity down to 1, so the fullest
/// cartons claim items before smaller leftovers are considered. Within a
/// level, combinations come in ranked order. Every leftover item ends up in
/// at least its single-item carton, so the inventory is always drained.
///
/// Greedy, no backtracking: minimality holds for the documented trap inputs
/// and is not claimed beyond them.
pub fn pack(mut inventory: Inventory, table: &CombinationTable) -> Packing {
    let mut entries = Vec::new();

    for total in (1..=table.capacity()).rev() {
        for combination in table.for_sum(total) {
            let count = formable(&inventory, combination);
            if count == 0 {
                continue;
            }
            // One take per part occurrence: a duplicated part is consumed
            // once per copy in the combination.
            for &part in combination.parts() {
                inventory.take(part, count);
            }
            entries.push(PackedCarton {
                combination: combination.clone(),
                count,
            });
        }
    }

    Packing { entries }
}

/// Cartons formable from the remaining counts with this exact combination:
/// the scarcest part bounds it at available / occurrences-in-combination.
fn formable(inventory: &Inventory, combination: &Combination) -> usize {
    combination
        .parts()
        .iter()
        .map(|&part| inventory.count(part) / combination.occurrences(part))
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::CARTON_CAPACITY;

    fn packed(input: &str) -> Packing {
        let table = CombinationTable::new(CARTON_CAPACITY);
        pack(Inventory::parse(input).unwrap(), &table)
    }

    fn items_consumed(packing: &Packing, size: usize) -> usize {
        packing
            .entries()
            .iter()
            .map(|entry| entry.combination.occurrences(size) * entry.count)
            .sum()
    }

    #[test]
    fn test_empty_inventory_packs_nothing() {
        let packing = packed("");
        assert!(packing.is_empty());
        assert_eq!(packing.carton_count(), 0);
    }

    #[test]
    fn test_single_item_single_carton() {
        let packing = packed("1");
        assert_eq!(packing.carton_count(), 1);
        assert_eq!(packing.entries()[0].combination.parts(), [1]);
    }

    #[test]
    fn test_pairs_large_items_before_small_fillers() {
        // 22222 as one carton would leave five lone 8s: six cartons instead
        // of five 82 pairs.
        let packing = packed("2222288888");
        assert_eq!(packing.carton_count(), 5);
        assert_eq!(packing.entries().len(), 1);
        assert_eq!(packing.entries()[0].combination.parts(), [8, 2]);
    }

    #[test]
    fn test_does_not_strand_sevens_behind_811() {
        // 811 first would leave 72/72/2: four cartons instead of 82/721/721.
        let packing = packed("81127272");
        assert_eq!(packing.carton_count(), 3);
        let parts: Vec<&[usize]> = packing
            .entries()
            .iter()
            .map(|entry| entry.combination.parts())
            .collect();
        assert_eq!(parts, vec![&[8, 2][..], &[7, 2, 1][..]]);
    }

    #[test]
    fn test_every_item_is_packed_exactly_once() {
        let input = "163841689525773";
        let packing = packed(input);
        for size in 1..=9 {
            let in_input = input
                .chars()
                .filter(|c| c.to_digit(10) == Some(size as u32))
                .count();
            assert_eq!(
                items_consumed(&packing, size),
                in_input,
                "size {size} count not preserved"
            );
        }
    }

    #[test]
    fn test_no_carton_over_capacity() {
        let packing = packed("163841689525773");
        for entry in packing.entries() {
            assert!(entry.combination.sum() <= CARTON_CAPACITY);
        }
    }

    #[test]
    fn test_entries_keep_processing_order() {
        let packing = packed("163841689525773");
        let sums: Vec<usize> = packing
            .entries()
            .iter()
            .map(|entry| entry.combination.sum())
            .collect();
        assert!(
            sums.windows(2).all(|w| w[0] >= w[1]),
            "entries not in descending fill-level order: {sums:?}"
        );
    }
}
