//! Packing pipeline: validate, count, allocate, render

use std::time::Instant;

use tracing::debug;

use carton_core::{
    CARTON_CAPACITY, CombinationTable, Inventory, RenderMode, Result, pack, render,
};

/// Orchestrates one packing run end to end.
///
/// Owns the combination table. The table depends only on the capacity, so
/// it is built once here and reused read-only across calls.
pub struct Packager {
    table: CombinationTable,
}

impl Packager {
    pub fn new() -> Self {
        Self {
            table: CombinationTable::new(CARTON_CAPACITY),
        }
    }

    /// Pack a string of item sizes and render the resulting cartons.
    ///
    /// Fails with the core error when `input` holds anything but digits in
    /// [1,9]; no packing work happens in that case. The error reaches the
    /// caller unmodified.
    pub fn pack(&self, input: &str, mode: RenderMode) -> Result<String> {
        let started = Instant::now();
        debug!(items = input.len(), "packing started");

        let inventory = Inventory::parse(input)?;
        let packing = pack(inventory, &self.table);
        let rendered = render(&packing, mode);

        debug!(
            cartons = packing.carton_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "packing finished"
        );
        Ok(rendered)
    }
}

impl Default for Packager {
    fn default() -> Self {
        Self::new()
    }
}
