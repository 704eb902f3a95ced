#[tokio::main]
async fn main() {
    shelfstock_observability::init();

    let addr =
        std::env::var("SHELFSTOCK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = shelfstock_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
