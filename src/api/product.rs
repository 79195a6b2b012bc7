use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::entities::product::Product;
use crate::error::AppError;
use crate::store::{PriceRange, ProductFilters, SharedStore, SortKey};

pub fn product_router() -> Router {
    Router::new()
        .route("/products", get(get_products))
        .route("/products/:id", get(get_product))
        .route("/featured-products", get(get_featured_products))
}

/// Query-string form of the product filter criteria. Customization type
/// ids arrive as a comma-separated list and are parsed by hand;
/// everything else is typed by the extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductQuery {
    category_id: Option<i32>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    customization_types: Option<String>,
    search: Option<String>,
    sort: Option<String>,
    min_rating: Option<f64>,
}

impl ProductQuery {
    fn into_filters(self) -> Result<ProductFilters, AppError> {
        let price_range = if self.min_price.is_some() || self.max_price.is_some() {
            Some(PriceRange {
                min: self.min_price,
                max: self.max_price,
            })
        } else {
            None
        };

        let customization_types = match &self.customization_types {
            Some(raw) => raw
                .split(',')
                .map(|part| {
                    part.trim().parse::<i32>().map_err(|_| {
                        AppError::Validation(format!(
                            "Invalid customization type id: {}",
                            part.trim()
                        ))
                    })
                })
                .collect::<Result<Vec<i32>, AppError>>()?,
            None => Vec::new(),
        };

        // Unrecognized sort strings are dropped, not rejected.
        let sort = self.sort.as_deref().and_then(SortKey::from_param);

        Ok(ProductFilters {
            category_id: self.category_id,
            price_range,
            customization_types,
            search: self.search,
            min_rating: self.min_rating,
            sort,
        })
    }
}

async fn get_products(
    Query(params): Query<ProductQuery>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Product>>, AppError> {
    let filters = params.into_filters()?;
    Ok(Json(store.get_products(&filters)))
}

async fn get_product(
    Path(id): Path<i32>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Product>, AppError> {
    store
        .get_product(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No product with id {id} was found")))
}

#[derive(Debug, Deserialize)]
struct FeaturedQuery {
    limit: Option<i64>,
}

async fn get_featured_products(
    Query(params): Query<FeaturedQuery>,
    Extension(store): Extension<SharedStore>,
) -> Json<Vec<Product>> {
    Json(store.get_featured_products(params.limit))
}
