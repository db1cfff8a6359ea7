//! Attribute classifier
//!
//! Partitions the operator's selected attributes into the variant subset
//! (participates in combination generation) and the specification subset
//! (describes the product as a whole).

use crate::catalog::AttributeCatalog;
use serde::{Deserialize, Serialize};
use shared::models::{Attribute, AttributeSelection};

/// Result of partitioning a selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    pub variant_attrs: Vec<Attribute>,
    pub spec_attrs: Vec<Attribute>,
}

/// Split the selection by each attribute's `is_variant_attribute` flag.
///
/// Pure function, no error cases: attribute ids unknown to the catalog are
/// ignored. Output order follows selection order.
pub fn classify(selection: &AttributeSelection, catalog: &dyn AttributeCatalog) -> Classification {
    let mut result = Classification::default();
    for attribute_id in selection.attribute_ids() {
        let Some(attribute) = catalog.find_attribute(attribute_id) else {
            continue;
        };
        if attribute.is_variant_attribute {
            result.variant_attrs.push(attribute);
        } else {
            result.spec_attrs.push(attribute);
        }
    }
    result
}
