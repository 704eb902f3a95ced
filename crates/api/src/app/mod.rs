//! HTTP application wiring (axum router + seeded registry).
//!
//! This folder is structured like:
//! - `services.rs`: registry construction and seed data
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `render.rs`: HTML rendering helpers

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod render;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let inventory = Arc::new(services::build_registry());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(inventory))
        .layer(ServiceBuilder::new())
}
