//! Attribute selection state for a product-editing session

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selected attribute and its chosen value ids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub attribute_id: i64,
    pub value_ids: HashSet<i64>,
}

/// Per-product attribute selection
///
/// Entry order is operator selection order and drives combination
/// enumeration order; the value set inside an entry is unordered.
/// This is the primary input that changes over an editing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeSelection {
    entries: Vec<SelectionEntry>,
}

impl AttributeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute with no values yet. No-op if already selected.
    pub fn select_attribute(&mut self, attribute_id: i64) {
        if !self.contains(attribute_id) {
            self.entries.push(SelectionEntry {
                attribute_id,
                value_ids: HashSet::new(),
            });
        }
    }

    /// Remove an attribute and all its selected values.
    pub fn deselect_attribute(&mut self, attribute_id: i64) {
        self.entries.retain(|e| e.attribute_id != attribute_id);
    }

    /// Select a value, implicitly selecting its attribute first.
    pub fn select_value(&mut self, attribute_id: i64, value_id: i64) {
        self.select_attribute(attribute_id);
        if let Some(entry) = self.entry_mut(attribute_id) {
            entry.value_ids.insert(value_id);
        }
    }

    /// Deselect a value. The attribute entry stays (possibly empty).
    pub fn deselect_value(&mut self, attribute_id: i64, value_id: i64) {
        if let Some(entry) = self.entry_mut(attribute_id) {
            entry.value_ids.remove(&value_id);
        }
    }

    pub fn contains(&self, attribute_id: i64) -> bool {
        self.entries.iter().any(|e| e.attribute_id == attribute_id)
    }

    /// Selected value ids for an attribute, if the attribute is selected.
    pub fn selected_values(&self, attribute_id: i64) -> Option<&HashSet<i64>> {
        self.entries
            .iter()
            .find(|e| e.attribute_id == attribute_id)
            .map(|e| &e.value_ids)
    }

    /// Selected attribute ids, in selection order.
    pub fn attribute_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|e| e.attribute_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, attribute_id: i64) -> Option<&mut SelectionEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.attribute_id == attribute_id)
    }
}
