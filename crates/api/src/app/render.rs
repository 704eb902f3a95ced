//! HTML rendering helpers.
//!
//! Pages are tiny and few; they are assembled with string formatting rather
//! than a template engine.

use chrono::NaiveDate;
use shelfstock_inventory::Inventory;

/// Escape text for interpolation into HTML.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

/// Landing page.
pub fn index_page() -> String {
    page(
        "Shelfstock",
        "<h1>Shelfstock</h1>\n<p>Inventory tracking for the stockroom.</p>\n<p><a href=\"/inventory\">View inventory</a></p>\n",
    )
}

/// Inventory overview: catalog table plus one row per stocked unit.
///
/// Unit rows resolve the type name through the registry; a dangling
/// `type_id` renders a placeholder instead. Lots whose expiration parses as
/// a date earlier than `today` are flagged.
pub fn inventory_page(inventory: &Inventory, today: NaiveDate) -> String {
    let mut body = String::from("<h1>Inventory</h1>\n");

    body.push_str("<h2>Item Types</h2>\n<table>\n");
    body.push_str("<tr><th>ID</th><th>Name</th><th>Category</th><th>Total Quantity</th></tr>\n");
    for (type_id, item_type) in inventory.item_types() {
        body.push_str(&format!(
            "<tr><td>{type_id}</td><td>{name}</td><td>{category}</td><td>{total}</td></tr>\n",
            name = escape(&item_type.name),
            category = escape(&item_type.category),
            total = inventory.total_quantity(*type_id),
        ));
    }
    body.push_str("</table>\n");

    body.push_str("<h2>Item Units</h2>\n<table>\n");
    body.push_str(
        "<tr><th>ID</th><th>Type</th><th>Expiration</th><th>Source</th><th>Description</th><th>Quantity</th></tr>\n",
    );
    for unit in inventory.item_units() {
        let type_name = match inventory.item_type(unit.type_id) {
            Some(item_type) => escape(&item_type.name),
            None => format!("unknown type {}", unit.type_id),
        };
        let expiration = match unit.is_expired(today) {
            Some(true) => format!("{} (expired)", escape(&unit.expiration)),
            _ => escape(&unit.expiration),
        };
        body.push_str(&format!(
            "<tr><td>{unit_id}</td><td>{type_name}</td><td>{expiration}</td><td>{source}</td><td>{description}</td><td>{quantity}</td></tr>\n",
            unit_id = unit.unit_id,
            source = escape(&unit.source),
            description = escape(&unit.description),
            quantity = unit.quantity,
        ));
    }
    body.push_str("</table>\n");

    page("Inventory", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfstock_inventory::{ItemType, ItemUnit, TypeId, UnitId};

    fn sample_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_item_type(ItemType::new(TypeId::new(1), "Rice & Beans", "Food"));
        inventory.add_item_unit(ItemUnit {
            unit_id: UnitId::new(1),
            type_id: TypeId::new(1),
            expiration: "2024-12-31".to_string(),
            source: "Donation".to_string(),
            description: "<script>alert(1)</script>".to_string(),
            quantity: 5,
        });
        inventory.add_item_unit(ItemUnit {
            unit_id: UnitId::new(2),
            type_id: TypeId::new(9),
            expiration: "soon".to_string(),
            source: "Purchase".to_string(),
            description: "dangling type reference".to_string(),
            quantity: 1,
        });
        inventory
    }

    #[test]
    fn escapes_markup_in_field_values() {
        let html = inventory_page(&sample_inventory(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert!(html.contains("Rice &amp; Beans"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn flags_expired_lots_only_when_date_is_past() {
        let before = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        assert!(!inventory_page(&sample_inventory(), before).contains("(expired)"));
        assert!(inventory_page(&sample_inventory(), after).contains("2024-12-31 (expired)"));
        // Unparseable expirations are never flagged.
        assert!(!inventory_page(&sample_inventory(), after).contains("soon (expired)"));
    }

    #[test]
    fn dangling_type_reference_renders_placeholder() {
        let html = inventory_page(&sample_inventory(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(html.contains("unknown type 9"));
    }
}
