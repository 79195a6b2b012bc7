use serde::{Deserialize, Serialize};

/// Static reference data describing a kind of product personalization
/// (engraving, color options, ...). `name` is the machine key that cart
/// item customization keys are loosely checked against; `color_hex` is
/// the UI tag color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationType {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub color_hex: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomizationType {
    pub name: String,
    pub display_name: String,
    pub color_hex: String,
}
