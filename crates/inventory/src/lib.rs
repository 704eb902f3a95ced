//! Inventory domain: catalog types, stocked units, and the in-memory registry.
//!
//! Pure data and lookups; no IO, no HTTP, no storage.

pub mod item;
pub mod registry;

pub use item::{ItemType, ItemUnit, TypeId, UnitId};
pub use registry::Inventory;
