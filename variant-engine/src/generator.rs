//! Combination generator
//!
//! Expands the variant-attribute selection into the full cartesian product
//! of attribute → value assignments.

use crate::catalog::AttributeCatalog;
use shared::models::{Attribute, AttributeSelection, AttributeValue, Combination, CombinationPart};

/// Callers should warn the operator above this many combinations; every
/// combination becomes a persisted row.
pub const COMBINATION_WARN_THRESHOLD: usize = 200;

/// Resolve one attribute's selected values, in catalog sort order.
///
/// Selected value ids missing from the catalog are skipped. An empty
/// result means the attribute is effectively unconfigured.
fn effective_values(
    attribute_id: i64,
    selection: &AttributeSelection,
    catalog: &dyn AttributeCatalog,
) -> Vec<AttributeValue> {
    let Some(selected) = selection.selected_values(attribute_id) else {
        return Vec::new();
    };
    catalog
        .list_values(attribute_id)
        .into_iter()
        .filter(|v| selected.contains(&v.id))
        .collect()
}

/// Product of per-attribute effective value counts.
///
/// Returns 0 when there are no variant attributes or any of them is
/// unconfigured, matching `generate`'s emptiness rule.
pub fn combination_count(
    variant_attrs: &[Attribute],
    selection: &AttributeSelection,
    catalog: &dyn AttributeCatalog,
) -> usize {
    if variant_attrs.is_empty() {
        return 0;
    }
    variant_attrs
        .iter()
        .map(|a| effective_values(a.id, selection, catalog).len())
        .fold(1usize, |acc, n| acc.saturating_mul(n))
}

/// Generate the cartesian product of the variant-attribute selections.
///
/// Attributes enumerate in selection order, values in catalog sort order
/// within each attribute, so output order is deterministic. Any variant
/// attribute with zero effective values yields no combinations at all (not
/// a partial product): a partially configured product is not ready for
/// variant generation.
pub fn generate(
    variant_attrs: &[Attribute],
    selection: &AttributeSelection,
    catalog: &dyn AttributeCatalog,
) -> Vec<Combination> {
    if variant_attrs.is_empty() {
        return Vec::new();
    }

    let mut axes: Vec<(&Attribute, Vec<AttributeValue>)> = Vec::with_capacity(variant_attrs.len());
    for attribute in variant_attrs {
        let values = effective_values(attribute.id, selection, catalog);
        if values.is_empty() {
            return Vec::new();
        }
        axes.push((attribute, values));
    }

    let mut combinations = vec![Combination::default()];
    for (attribute, values) in &axes {
        let mut next = Vec::with_capacity(combinations.len() * values.len());
        for combination in &combinations {
            for value in values {
                let mut parts = combination.parts.clone();
                parts.push(CombinationPart {
                    attribute_id: attribute.id,
                    attribute_name: attribute.name.clone(),
                    value_id: value.id,
                    value: value.value.clone(),
                });
                next.push(Combination { parts });
            }
        }
        combinations = next;
    }
    combinations
}
