use serde::{Deserialize, Serialize};

/// A catalog product. Created once at startup; there is no update or
/// delete path. `bestseller` and `new` are independent flags, and
/// `customization_options` references `CustomizationType` ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub price: f64,
    pub category_id: i32,
    pub rating: f64,
    pub image: String,
    pub images: Vec<String>,
    pub is_bestseller: bool,
    pub is_new: bool,
    pub customization_options: Vec<i32>,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub price: f64,
    pub category_id: i32,
    pub rating: f64,
    pub image: String,
    pub images: Vec<String>,
    pub is_bestseller: bool,
    pub is_new: bool,
    pub customization_options: Vec<i32>,
    pub features: Vec<String>,
}
