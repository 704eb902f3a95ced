//! Application state wiring.

use shelfstock_inventory::{Inventory, ItemType, ItemUnit, TypeId, UnitId};

/// Build the registry the web layer serves, seeded with the demo dataset.
///
/// Handlers only read the registry, so it is shared as a plain `Arc` with no
/// locking.
pub fn build_registry() -> Inventory {
    let mut inventory = Inventory::new();

    inventory.add_item_type(ItemType::new(TypeId::new(1), "Canned Beans", "Food"));
    inventory.add_item_type(ItemType::new(TypeId::new(2), "Rice", "Food"));

    inventory.add_item_unit(ItemUnit {
        unit_id: UnitId::new(1),
        type_id: TypeId::new(1),
        expiration: "2024-12-31".to_string(),
        source: "Donation".to_string(),
        description: "Canned Beans from local food drive".to_string(),
        quantity: 100,
    });
    inventory.add_item_unit(ItemUnit {
        unit_id: UnitId::new(2),
        type_id: TypeId::new(2),
        expiration: "2025-01-31".to_string(),
        source: "Purchase".to_string(),
        description: "Rice purchased from supplier".to_string(),
        quantity: 200,
    });

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_matches_expected_shape() {
        let inventory = build_registry();

        assert_eq!(inventory.item_types().len(), 2);
        assert_eq!(inventory.item_units().len(), 2);
        assert_eq!(inventory.total_quantity(TypeId::new(1)), 100);
        assert_eq!(inventory.total_quantity(TypeId::new(2)), 200);
    }
}
