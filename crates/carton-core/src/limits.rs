//! Compile-time packing bounds

/// Total item size a single carton can hold.
pub const CARTON_CAPACITY: usize = 10;

/// Smallest size an item may declare.
pub const MIN_ITEM_SIZE: usize = 1;

/// Largest size an item may declare.
pub const MAX_ITEM_SIZE: usize = 9;
