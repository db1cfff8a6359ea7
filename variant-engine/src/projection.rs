//! Save-time projection
//!
//! Splits the reconciled variant list into the two external write sets: the
//! variant rows and the variant ↔ attribute-value links. Links are emitted
//! only for variant attributes; specification-attribute values attach to
//! the product through a separate, non-combinatorial assignment step and
//! never to a variant.

use shared::models::{Attribute, Variant, VariantAttributeLink, VariantProjection, VariantRow};

/// Project the final variant list into persistable write sets.
pub fn project(
    product_id: i64,
    variants: &[Variant],
    variant_attrs: &[Attribute],
) -> VariantProjection {
    let mut projection = VariantProjection::default();
    for variant in variants {
        projection.rows.push(VariantRow {
            id: variant.id,
            product_id,
            name: variant.name.clone(),
            sku: variant.sku.clone(),
            price: variant.price,
            stock_quantity: variant.stock_quantity,
            attributes: variant.attributes.clone(),
        });
        for part in &variant.attributes.parts {
            if variant_attrs.iter().any(|a| a.id == part.attribute_id) {
                projection.links.push(VariantAttributeLink {
                    variant_id: variant.id,
                    attribute_id: part.attribute_id,
                    value_id: part.value_id,
                });
            }
        }
    }
    projection
}
