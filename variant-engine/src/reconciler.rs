//! Variant reconciler
//!
//! Maps a freshly generated combination set onto the previous variant list
//! so that operator-entered price, stock and SKU survive selection changes.
//! This is the part where a naive regeneration silently wipes filled-in
//! data whenever an attribute value is added or removed.

use rust_decimal::Decimal;
use shared::models::{Combination, Variant};

/// SKU prefix used when the product has no SKU of its own yet.
const SKU_PLACEHOLDER: &str = "SKU";

/// Defaults applied to freshly minted variants
#[derive(Debug, Clone)]
pub struct VariantDefaults {
    /// Product base price
    pub base_price: Decimal,
    /// Product SKU or slug
    pub sku_prefix: Option<String>,
}

impl VariantDefaults {
    /// Default SKU for the combination at 1-based `position`.
    fn sku_for(&self, position: usize) -> String {
        let prefix = self.sku_prefix.as_deref().unwrap_or(SKU_PLACEHOLDER);
        format!("{}-{}", prefix, position)
    }
}

/// Monotonic identity allocator, scoped to one reconcile pass.
///
/// Seeded past the maximum identity in the previous variant list, so minted
/// ids can never collide with inherited ones and no per-mint rescanning is
/// needed.
#[derive(Debug)]
pub struct VariantIdAllocator {
    next: i64,
}

impl VariantIdAllocator {
    pub fn seeded_from(existing: &[Variant]) -> Self {
        let max = existing.iter().map(|v| v.id).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn mint(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Partial-key slot match: the two attribute maps share at least one
/// attribute key and agree on the display value for every shared key.
///
/// Intentionally loose: a variant keyed only on Color still claims a new
/// Color+Size combination with the same Color, so manually entered data is
/// preserved across attribute-set shape changes. First match wins among
/// multiple candidates (previous list order is stable across calls).
fn matches_slot(previous: &Variant, combination: &Combination) -> bool {
    let mut shared_keys = 0usize;
    for part in &combination.parts {
        if let Some(prev_value) = previous.attributes.value_for(part.attribute_id) {
            if prev_value != part.value {
                return false;
            }
            shared_keys += 1;
        }
    }
    shared_keys > 0
}

/// Reconcile the new combination set against the previous variant list.
///
/// Emits exactly one variant per combination, in combination order.
/// Matched slots keep their identity, price, stock quantity and SKU; the
/// name always reflects the current combination. Unmatched slots get the
/// product defaults and a fresh identity. Each previous variant is claimed
/// at most once, so no identity ever appears twice in the output.
///
/// Combinations no longer producible simply have no slot here and are
/// dropped with their data.
pub fn reconcile(
    combinations: &[Combination],
    previous: &[Variant],
    defaults: &VariantDefaults,
) -> Vec<Variant> {
    let mut allocator = VariantIdAllocator::seeded_from(previous);
    let mut claimed = vec![false; previous.len()];

    combinations
        .iter()
        .enumerate()
        .map(|(idx, combination)| {
            let name = combination.display_name();
            let candidate = previous
                .iter()
                .enumerate()
                .find(|(i, v)| !claimed[*i] && matches_slot(v, combination));

            match candidate {
                Some((i, prior)) => {
                    claimed[i] = true;
                    Variant {
                        id: prior.id,
                        name,
                        attributes: combination.clone(),
                        price: prior.price,
                        stock_quantity: prior.stock_quantity,
                        sku: prior.sku.clone(),
                    }
                }
                None => Variant {
                    id: allocator.mint(),
                    name,
                    attributes: combination.clone(),
                    price: defaults.base_price,
                    stock_quantity: 0,
                    sku: defaults.sku_for(idx + 1),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CombinationPart;

    fn combo(parts: &[(i64, &str, i64, &str)]) -> Combination {
        Combination {
            parts: parts
                .iter()
                .map(|(aid, aname, vid, value)| CombinationPart {
                    attribute_id: *aid,
                    attribute_name: aname.to_string(),
                    value_id: *vid,
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    fn variant(id: i64, attrs: &[(i64, &str, i64, &str)]) -> Variant {
        let attributes = combo(attrs);
        Variant {
            id,
            name: attributes.display_name(),
            attributes,
            price: Decimal::new(1999, 2),
            stock_quantity: 7,
            sku: "OLD-1".to_string(),
        }
    }

    fn defaults() -> VariantDefaults {
        VariantDefaults {
            base_price: Decimal::new(500, 2),
            sku_prefix: Some("TEE".to_string()),
        }
    }

    #[test]
    fn partial_key_match_inherits_data() {
        let prev = vec![variant(1, &[(1, "Color", 11, "Red")])];
        let combos = vec![combo(&[(1, "Color", 11, "Red"), (2, "Size", 21, "M")])];

        let out = reconcile(&combos, &prev, &defaults());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
        assert_eq!(out[0].price, Decimal::new(1999, 2));
        assert_eq!(out[0].stock_quantity, 7);
        assert_eq!(out[0].sku, "OLD-1");
        // Name and attribute map always reflect the current combination
        assert_eq!(out[0].name, "Color: Red, Size: M");
        assert_eq!(out[0].attributes, combos[0]);
    }

    #[test]
    fn shared_key_disagreement_is_no_match() {
        let prev = vec![variant(1, &[(1, "Color", 11, "Red")])];
        let combos = vec![combo(&[(1, "Color", 12, "Blue"), (2, "Size", 21, "M")])];

        let out = reconcile(&combos, &prev, &defaults());
        assert_ne!(out[0].id, 1);
        assert_eq!(out[0].price, Decimal::new(500, 2));
        assert_eq!(out[0].stock_quantity, 0);
    }

    #[test]
    fn no_shared_keys_is_no_match() {
        let prev = vec![variant(1, &[(1, "Color", 11, "Red")])];
        let combos = vec![combo(&[(2, "Size", 21, "M")])];

        let out = reconcile(&combos, &prev, &defaults());
        assert_ne!(out[0].id, 1);
    }

    #[test]
    fn previous_variant_is_claimed_at_most_once() {
        // A Color-only prior partially matches both Red combinations; only
        // the first may inherit its identity.
        let prev = vec![variant(1, &[(1, "Color", 11, "Red")])];
        let combos = vec![
            combo(&[(1, "Color", 11, "Red"), (2, "Size", 20, "S")]),
            combo(&[(1, "Color", 11, "Red"), (2, "Size", 21, "M")]),
        ];

        let out = reconcile(&combos, &prev, &defaults());
        assert_eq!(out[0].id, 1);
        assert_ne!(out[1].id, 1);
        assert_ne!(out[0].id, out[1].id);
    }

    #[test]
    fn minted_ids_start_past_previous_maximum() {
        let prev = vec![variant(41, &[(1, "Color", 11, "Red")])];
        let combos = vec![
            combo(&[(1, "Color", 11, "Red")]),
            combo(&[(1, "Color", 12, "Blue")]),
        ];

        let out = reconcile(&combos, &prev, &defaults());
        assert_eq!(out[0].id, 41);
        assert_eq!(out[1].id, 42);
    }

    #[test]
    fn minted_sku_uses_positional_index() {
        let combos = vec![
            combo(&[(1, "Color", 11, "Red")]),
            combo(&[(1, "Color", 12, "Blue")]),
        ];

        let out = reconcile(&combos, &[], &defaults());
        assert_eq!(out[0].sku, "TEE-1");
        assert_eq!(out[1].sku, "TEE-2");
    }

    #[test]
    fn placeholder_prefix_when_product_has_no_sku() {
        let combos = vec![combo(&[(1, "Color", 11, "Red")])];
        let defaults = VariantDefaults {
            base_price: Decimal::ZERO,
            sku_prefix: None,
        };

        let out = reconcile(&combos, &[], &defaults);
        assert_eq!(out[0].sku, "SKU-1");
    }
}
