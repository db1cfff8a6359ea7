//! Variant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One attribute/value pair of a combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationPart {
    pub attribute_id: i64,
    pub attribute_name: String,
    /// Carried for save-time link projection; slot matching compares the
    /// display string only.
    pub value_id: i64,
    pub value: String,
}

/// One tuple of the cartesian product of variant-attribute values
///
/// Transient: recomputed on every selection change. Parts are ordered by
/// attribute selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub parts: Vec<CombinationPart>,
}

impl Combination {
    /// Display value for `attribute_id`, if this combination carries it.
    pub fn value_for(&self, attribute_id: i64) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.attribute_id == attribute_id)
            .map(|p| p.value.as_str())
    }

    /// Derived display name, e.g. `"Color: Red, Size: M"`.
    pub fn display_name(&self) -> String {
        self.parts
            .iter()
            .map(|p| format!("{}: {}", p.attribute_name, p.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Product variant (one per reachable combination)
///
/// Identity is stable across reconciliation when the combination still
/// matches a prior slot; price, stock and SKU are operator-entered via the
/// edit surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub name: String,
    pub attributes: Combination,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub sku: String,
}

/// Persisted variant row (save-time projection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRow {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: i32,
    /// Raw attribute map as generated
    pub attributes: Combination,
}

/// Variant ↔ attribute-value link row
///
/// Emitted only for variant attributes; specification values attach to the
/// product directly, never to a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAttributeLink {
    pub variant_id: i64,
    pub attribute_id: i64,
    pub value_id: i64,
}

/// Save-time write set handed to the persistence adapter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantProjection {
    pub rows: Vec<VariantRow>,
    pub links: Vec<VariantAttributeLink>,
}
