//! Product-editing session
//!
//! Owns the mutable attribute selection and the current variant list, and
//! re-runs classify → generate → reconcile synchronously after every
//! selection mutation, feeding its own prior output back in as the
//! previous variant list. Operator edits accumulate correctly across an
//! arbitrary sequence of selection changes within one session.
//!
//! # Flow
//!
//! ```text
//! select/deselect attribute or value
//!     ├─ 1. classify  selection → variant / specification attributes
//!     ├─ 2. warn      if the combination count crosses the threshold
//!     ├─ 3. generate  cartesian product of the variant selection
//!     └─ 4. reconcile against the current variant list (data preserved)
//! ```

#[cfg(test)]
mod tests;

use crate::catalog::AttributeCatalog;
use crate::classifier::{Classification, classify};
use crate::error::EngineResult;
use crate::generator::{COMBINATION_WARN_THRESHOLD, combination_count, generate};
use crate::persistence::VariantPersistenceAdapter;
use crate::projection::project;
use crate::reconciler::{VariantDefaults, reconcile};
use rust_decimal::Decimal;
use shared::models::{
    AttributeSelection, ProductContext, Variant, VariantAttributeLink, VariantRow,
};
use std::sync::Arc;

/// One product-editing session
///
/// The `epoch` field is a unique id generated per session, used only for
/// log correlation.
pub struct EditSession {
    catalog: Arc<dyn AttributeCatalog>,
    product: ProductContext,
    selection: AttributeSelection,
    classification: Classification,
    variants: Vec<Variant>,
    epoch: String,
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("epoch", &self.epoch)
            .field("product_id", &self.product.product_id)
            .field("variants", &self.variants.len())
            .finish()
    }
}

impl EditSession {
    /// Start an empty session for a product.
    pub fn new(catalog: Arc<dyn AttributeCatalog>, product: ProductContext) -> Self {
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            epoch = %epoch,
            product_id = product.product_id,
            "variant editing session started"
        );
        Self {
            catalog,
            product,
            selection: AttributeSelection::new(),
            classification: Classification::default(),
            variants: Vec::new(),
            epoch,
        }
    }

    /// Seed a session for an existing product from persisted state.
    ///
    /// The attribute-value links are reverse-mapped into the initial
    /// selection; the rows become the seed previous-variant list, so the
    /// first reconcile pass re-attaches their identities and data.
    pub fn load(
        catalog: Arc<dyn AttributeCatalog>,
        product: ProductContext,
        rows: Vec<VariantRow>,
        links: &[VariantAttributeLink],
    ) -> Self {
        let mut session = Self::new(catalog, product);
        for link in links {
            session.selection.select_value(link.attribute_id, link.value_id);
        }
        session.variants = rows
            .into_iter()
            .map(|row| Variant {
                id: row.id,
                name: row.name,
                attributes: row.attributes,
                price: row.price,
                stock_quantity: row.stock_quantity,
                sku: row.sku,
            })
            .collect();
        session.refresh();
        session
    }

    // ========================================================================
    // Selection mutations (each triggers a full recompute)
    // ========================================================================

    pub fn select_attribute(&mut self, attribute_id: i64) {
        self.selection.select_attribute(attribute_id);
        self.refresh();
    }

    pub fn deselect_attribute(&mut self, attribute_id: i64) {
        self.selection.deselect_attribute(attribute_id);
        self.refresh();
    }

    pub fn select_value(&mut self, attribute_id: i64, value_id: i64) {
        self.selection.select_value(attribute_id, value_id);
        self.refresh();
    }

    pub fn deselect_value(&mut self, attribute_id: i64, value_id: i64) {
        self.selection.deselect_value(attribute_id, value_id);
        self.refresh();
    }

    /// Re-run the full pipeline against the current selection.
    fn refresh(&mut self) {
        self.classification = classify(&self.selection, self.catalog.as_ref());

        let count = combination_count(
            &self.classification.variant_attrs,
            &self.selection,
            self.catalog.as_ref(),
        );
        if count > COMBINATION_WARN_THRESHOLD {
            tracing::warn!(
                epoch = %self.epoch,
                combinations = count,
                "combination count exceeds practical threshold, every combination becomes a persisted row"
            );
        }

        let combinations = generate(
            &self.classification.variant_attrs,
            &self.selection,
            self.catalog.as_ref(),
        );
        let defaults = VariantDefaults {
            base_price: self.product.base_price,
            sku_prefix: self.product.sku.clone(),
        };
        self.variants = reconcile(&combinations, &self.variants, &defaults);

        tracing::debug!(
            epoch = %self.epoch,
            variants = self.variants.len(),
            "variant list regenerated"
        );
    }

    // ========================================================================
    // Edit surface pass-through (no recompute)
    // ========================================================================

    /// Operator price override. Returns false if the variant is gone.
    pub fn set_price(&mut self, variant_id: i64, price: Decimal) -> bool {
        self.variant_mut(variant_id)
            .map(|v| v.price = price)
            .is_some()
    }

    pub fn set_stock_quantity(&mut self, variant_id: i64, stock_quantity: i32) -> bool {
        self.variant_mut(variant_id)
            .map(|v| v.stock_quantity = stock_quantity)
            .is_some()
    }

    pub fn set_sku(&mut self, variant_id: i64, sku: String) -> bool {
        self.variant_mut(variant_id).map(|v| v.sku = sku).is_some()
    }

    fn variant_mut(&mut self, variant_id: i64) -> Option<&mut Variant> {
        self.variants.iter_mut().find(|v| v.id == variant_id)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn selection(&self) -> &AttributeSelection {
        &self.selection
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Ready for variant display: at least one variant attribute, and
    /// every variant attribute resolves at least one selected value.
    /// Callers suppress the variant panel when false; the recompute loop
    /// has already cleared any stale variants in that case.
    pub fn is_ready(&self) -> bool {
        !self.classification.variant_attrs.is_empty()
            && combination_count(
                &self.classification.variant_attrs,
                &self.selection,
                self.catalog.as_ref(),
            ) > 0
    }

    // ========================================================================
    // Save
    // ========================================================================

    /// Project and submit the current variant list.
    ///
    /// The in-memory list is not touched while the save is in flight or on
    /// failure; a retry re-submits the same snapshot.
    pub async fn save(&self, adapter: &dyn VariantPersistenceAdapter) -> EngineResult<()> {
        let projection = project(
            self.product.product_id,
            &self.variants,
            &self.classification.variant_attrs,
        );
        match adapter
            .replace_variants(self.product.product_id, &projection)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    epoch = %self.epoch,
                    rows = projection.rows.len(),
                    links = projection.links.len(),
                    "variants saved"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    epoch = %self.epoch,
                    error = %e,
                    "variant save failed, session state retained for retry"
                );
                Err(e.into())
            }
        }
    }
}
