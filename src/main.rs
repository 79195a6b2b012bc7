use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rust_atelier::api::create_api_router;
use rust_atelier::entities::seed;
use rust_atelier::store::{MemStorage, SharedStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();

    let store: SharedStore = Arc::new(MemStorage::new());
    seed(store.as_ref());

    let app = create_api_router(store);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await.expect("server error");
}
