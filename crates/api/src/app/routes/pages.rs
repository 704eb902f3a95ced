use std::sync::Arc;

use axum::{extract::Extension, response::Html};
use chrono::Utc;

use shelfstock_inventory::Inventory;

use crate::app::render;

pub async fn index() -> Html<String> {
    Html(render::index_page())
}

pub async fn view_inventory(Extension(inventory): Extension<Arc<Inventory>>) -> Html<String> {
    Html(render::inventory_page(&inventory, Utc::now().date_naive()))
}

// Mutation pages are placeholders; no POST endpoints exist.

pub async fn remove_item() -> &'static str {
    "Remove Item Page under construction"
}

pub async fn add_item() -> &'static str {
    "Add New Item Page under construction"
}

pub async fn update_item() -> &'static str {
    "Update Item Page under construction"
}
