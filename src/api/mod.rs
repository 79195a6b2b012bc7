pub mod cart;
pub mod category;
pub mod customization;
pub mod product;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::store::SharedStore;

use cart::cart_router;
use category::category_router;
use customization::customization_router;
use product::product_router;

pub fn create_api_router(store: SharedStore) -> Router {
    Router::new()
        .nest("/api", category_router())
        .nest("/api", product_router())
        .nest("/api", customization_router())
        .nest("/api", cart_router())
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}
