use serde::{Deserialize, Serialize};

/// A top-level catalog category. Created once at startup; the product
/// count is informational and never recomputed from the product set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub product_count: i32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub image: String,
    pub product_count: i32,
}
