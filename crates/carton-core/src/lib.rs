//! Core domain models and packing logic for carton
//!
//! This crate contains:
//! - Domain models (Inventory, Combination, Packing)
//! - The combination table and the allocation loop
//! - Deterministic string rendering

pub mod combination;
pub mod error;
pub mod inventory;
pub mod limits;
pub mod packer;
pub mod render;

pub use combination::{Combination, CombinationTable};
pub use error::{Error, Result};
pub use inventory::Inventory;
pub use limits::{CARTON_CAPACITY, MAX_ITEM_SIZE, MIN_ITEM_SIZE};
pub use packer::{PackedCarton, Packing, pack};
pub use render::{RenderMode, render};
