//! Attribute Model

use serde::{Deserialize, Serialize};

/// Attribute input type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeInputType {
    FreeText,
    Enumerated,
}

/// Attribute entity
///
/// Owned by the attribute catalog; read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub id: i64,
    pub name: String,
    pub input_type: AttributeInputType,
    /// Variant attributes combine into purchasable variants;
    /// specification attributes describe the product as a whole.
    pub is_variant_attribute: bool,
    pub display_order: i32,
    pub is_active: bool,
}

/// Attribute value entity (catalog-owned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeValue {
    pub id: i64,
    /// Parent attribute reference
    pub attribute_id: i64,
    /// Display value, e.g. "Red"
    pub value: String,
    pub display_order: i32,
}
