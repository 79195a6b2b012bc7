use axum::{extract::Extension, routing::get, Json, Router};

use crate::entities::customization::CustomizationType;
use crate::store::SharedStore;

pub fn customization_router() -> Router {
    Router::new().route("/customization-types", get(get_customization_types))
}

async fn get_customization_types(
    Extension(store): Extension<SharedStore>,
) -> Json<Vec<CustomizationType>> {
    Json(store.get_customization_types())
}
