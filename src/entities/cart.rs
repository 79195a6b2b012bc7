use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form customization selections on a cart item. Keys correspond
/// loosely to `CustomizationType` names but are stored verbatim. The map
/// keeps insertion order (serde_json `preserve_order`), which the display
/// formatter relies on.
pub type Customizations = serde_json::Map<String, Value>;

/// A shopping cart. `user_id` is absent for anonymous carts. Timestamps
/// are RFC 3339 strings set at creation; the cart itself is never
/// updated or deleted, and its item set is derived from `CartItem.cart_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: i32,
    pub user_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCart {
    pub user_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: u32,
    pub customizations: Customizations,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: u32,
    pub customizations: Customizations,
}

/// A cart item joined with its product. `product` is `None` when the
/// referenced product cannot be resolved; aggregation treats such items
/// as contributing nothing to the total price.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Option<super::product::Product>,
    pub customization_text: String,
}

impl CartItemWithProduct {
    pub fn new(item: CartItem, product: Option<super::product::Product>) -> Self {
        let customization_text = format_customizations(&item.customizations);
        CartItemWithProduct {
            item,
            product,
            customization_text,
        }
    }
}

/// Sum of `price * quantity` over the joined items. An item whose product
/// did not resolve contributes 0 rather than failing the computation.
pub fn cart_total(items: &[CartItemWithProduct]) -> f64 {
    items
        .iter()
        .map(|entry| {
            entry
                .product
                .as_ref()
                .map_or(0.0, |product| product.price * f64::from(entry.item.quantity))
        })
        .sum()
}

/// Sum of quantities over the items.
pub fn cart_quantity(items: &[CartItemWithProduct]) -> u32 {
    items.iter().map(|entry| entry.item.quantity).sum()
}

/// Renders a customization map as a single display line.
///
/// Keys are converted from snake_case to Title Case; values keep their
/// natural string form, except `color` values which get their first
/// letter capitalized. Pairs are joined with `", "` in map order. An
/// empty map renders as `"No customization"`.
pub fn format_customizations(customizations: &Customizations) -> String {
    if customizations.is_empty() {
        return "No customization".to_string();
    }

    customizations
        .iter()
        .map(|(key, value)| {
            let label = key
                .split('_')
                .map(capitalize_first)
                .collect::<Vec<_>>()
                .join(" ");
            let rendered = match value {
                Value::String(text) if key == "color" => capitalize_first(text),
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            format!("{label}: {rendered}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
