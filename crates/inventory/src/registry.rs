use std::collections::BTreeMap;

use crate::item::{ItemType, ItemUnit, TypeId};

/// In-memory inventory registry: catalog of item types plus the list of
/// stocked units. No persistence, no cross-container invariants.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    item_types: BTreeMap<TypeId, ItemType>,
    item_units: Vec<ItemUnit>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog entry. A duplicate `type_id` silently replaces the
    /// previous entry.
    pub fn add_item_type(&mut self, item_type: ItemType) {
        self.item_types.insert(item_type.type_id, item_type);
    }

    /// Record a stocked unit. Appends unconditionally: unit ids are not
    /// checked for uniqueness and `type_id` may point at a missing type.
    pub fn add_item_unit(&mut self, unit: ItemUnit) {
        self.item_units.push(unit);
    }

    pub fn item_types(&self) -> &BTreeMap<TypeId, ItemType> {
        &self.item_types
    }

    pub fn item_units(&self) -> &[ItemUnit] {
        &self.item_units
    }

    pub fn item_type(&self, type_id: TypeId) -> Option<&ItemType> {
        self.item_types.get(&type_id)
    }

    /// Units belonging to one catalog entry, in insertion order.
    pub fn units_of(&self, type_id: TypeId) -> impl Iterator<Item = &ItemUnit> {
        self.item_units.iter().filter(move |u| u.type_id == type_id)
    }

    /// Total stocked quantity across all units of one type (0 when none).
    pub fn total_quantity(&self, type_id: TypeId) -> i64 {
        self.units_of(type_id).map(|u| u.quantity).sum()
    }
}
