use axum::{
    extract::{Extension, Path},
    routing::get,
    Json, Router,
};

use crate::entities::category::Category;
use crate::error::AppError;
use crate::store::SharedStore;

pub fn category_router() -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/:id", get(get_category))
}

async fn get_categories(Extension(store): Extension<SharedStore>) -> Json<Vec<Category>> {
    Json(store.get_categories())
}

async fn get_category(
    Path(id): Path<i32>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Category>, AppError> {
    store
        .get_category(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No category with id {id} was found")))
}
