use axum::{routing::get, Router};

pub mod pages;
pub mod system;

/// Router for all page endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/inventory", get(pages::view_inventory))
        .route("/remove", get(pages::remove_item))
        .route("/add", get(pages::add_item))
        .route("/update", get(pages::update_item))
}
