//! Deterministic string rendering of a packing

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::packer::Packing;

/// How a packing is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// One group per carton: `82/721/721`.
    PerCarton,
    /// One group per combination with its carton count: `82(1)/721(2)`.
    Aggregated,
}

/// Render a packing as its compact string form.
///
/// Entries are emitted in packing order; the `/` sits between groups, never
/// at the end. An empty packing renders as the empty string.
pub fn render(packing: &Packing, mode: RenderMode) -> String {
    let mut out = String::new();

    for entry in packing.entries() {
        match mode {
            RenderMode::PerCarton => {
                for _ in 0..entry.count {
                    let _ = write!(out, "{}/", entry.combination);
                }
            }
            RenderMode::Aggregated => {
                let _ = write!(out, "{}({})/", entry.combination, entry.count);
            }
        }
    }

    if out.ends_with('/') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combination::CombinationTable;
    use crate::inventory::Inventory;
    use crate::limits::CARTON_CAPACITY;
    use crate::packer::pack;

    fn packed(input: &str) -> Packing {
        let table = CombinationTable::new(CARTON_CAPACITY);
        pack(Inventory::parse(input).unwrap(), &table)
    }

    #[test]
    fn test_empty_packing_renders_empty() {
        assert_eq!(render(&packed(""), RenderMode::PerCarton), "");
        assert_eq!(render(&packed(""), RenderMode::Aggregated), "");
    }

    #[test]
    fn test_single_carton_has_no_separator() {
        assert_eq!(render(&packed("1"), RenderMode::PerCarton), "1");
    }

    #[test]
    fn test_per_carton_repeats_each_combination() {
        assert_eq!(
            render(&packed("2222288888"), RenderMode::PerCarton),
            "82/82/82/82/82"
        );
    }

    #[test]
    fn test_aggregated_groups_with_count() {
        assert_eq!(
            render(&packed("2222288888"), RenderMode::Aggregated),
            "82(5)"
        );
        assert_eq!(
            render(&packed("81127272"), RenderMode::Aggregated),
            "82(1)/721(2)"
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let packing = packed("163841689525773");
        assert_eq!(
            render(&packing, RenderMode::PerCarton),
            render(&packing, RenderMode::PerCarton)
        );
        assert_eq!(
            render(&packing, RenderMode::Aggregated),
            render(&packing, RenderMode::Aggregated)
        );
    }

    #[test]
    fn test_render_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&RenderMode::PerCarton).unwrap(),
            "\"per_carton\""
        );
        let mode: RenderMode = serde_json::from_str("\"aggregated\"").unwrap();
        assert_eq!(mode, RenderMode::Aggregated);
    }

    #[test]
    fn test_packing_serde_round_trip() {
        let packing = packed("81127272");
        let json = serde_json::to_string(&packing).unwrap();
        let back: Packing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, packing);
    }
}
