use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

use crate::entities::cart::{
    cart_quantity, cart_total, Cart, CartItemWithProduct, Customizations, NewCart, NewCartItem,
};
use crate::error::AppError;
use crate::store::SharedStore;

pub fn cart_router() -> Router {
    Router::new()
        .route("/carts", post(create_cart))
        .route("/carts/:id", get(get_cart))
        .route("/cart-items", post(add_cart_item))
        .route("/cart-items/:id", patch(update_cart_item).delete(remove_cart_item))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCartPayload {
    user_id: Option<i32>,
}

async fn create_cart(
    Extension(store): Extension<SharedStore>,
    payload: Option<Json<CreateCartPayload>>,
) -> (StatusCode, Json<Cart>) {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let now = Utc::now().to_rfc3339();
    let cart = store.create_cart(NewCart {
        user_id: payload.user_id,
        created_at: now.clone(),
        updated_at: now,
    });
    (StatusCode::CREATED, Json(cart))
}

/// A cart joined with its items, each item joined with its product, plus
/// the aggregated totals over the item set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartResponse {
    #[serde(flatten)]
    cart: Cart,
    items: Vec<CartItemWithProduct>,
    total_price: f64,
    total_quantity: u32,
}

async fn get_cart(
    Path(id): Path<i32>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<CartResponse>, AppError> {
    let cart = store
        .get_cart(id)
        .ok_or_else(|| AppError::NotFound(format!("No cart with id {id} was found")))?;

    let items: Vec<CartItemWithProduct> = store
        .get_cart_items(cart.id)
        .into_iter()
        .map(|item| {
            let product = store.get_product(item.product_id);
            CartItemWithProduct::new(item, product)
        })
        .collect();

    let total_price = cart_total(&items);
    let total_quantity = cart_quantity(&items);

    Ok(Json(CartResponse {
        cart,
        items,
        total_price,
        total_quantity,
    }))
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct AddCartItemPayload {
    cart_id: i32,
    product_id: i32,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    quantity: u32,
    #[serde(default)]
    customizations: Customizations,
}

async fn add_cart_item(
    Extension(store): Extension<SharedStore>,
    Json(payload): Json<AddCartItemPayload>,
) -> Result<(StatusCode, Json<CartItemWithProduct>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Referential checks run before anything is created; a failed check
    // must not leave a dangling item behind.
    let product = store.get_product(payload.product_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "No product with id {} was found",
            payload.product_id
        ))
    })?;
    store.get_cart(payload.cart_id).ok_or_else(|| {
        AppError::NotFound(format!("No cart with id {} was found", payload.cart_id))
    })?;

    // Customization keys are stored verbatim; ones that don't match a
    // known customization type are accepted with a warning.
    let known_types = store.get_customization_types();
    for key in payload.customizations.keys() {
        if !known_types.iter().any(|kind| kind.name == *key) {
            warn!(key = %key, "customization key does not match a known customization type");
        }
    }

    let item = store.add_cart_item(NewCartItem {
        cart_id: payload.cart_id,
        product_id: payload.product_id,
        quantity: payload.quantity,
        customizations: payload.customizations,
    });

    Ok((
        StatusCode::CREATED,
        Json(CartItemWithProduct::new(item, Some(product))),
    ))
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateQuantityPayload {
    #[validate(range(min = 1))]
    quantity: u32,
}

async fn update_cart_item(
    Path(id): Path<i32>,
    Extension(store): Extension<SharedStore>,
    Json(payload): Json<UpdateQuantityPayload>,
) -> Result<Json<CartItemWithProduct>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = store
        .update_cart_item_quantity(id, payload.quantity)
        .ok_or_else(|| AppError::NotFound(format!("No cart item with id {id} was found")))?;

    let product = store.get_product(item.product_id);
    Ok(Json(CartItemWithProduct::new(item, product)))
}

async fn remove_cart_item(
    Path(id): Path<i32>,
    Extension(store): Extension<SharedStore>,
) -> Result<StatusCode, AppError> {
    if store.remove_cart_item(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No cart item with id {id} was found"
        )))
    }
}
