//! Attribute catalog seam
//!
//! The catalog owns attribute definitions and their permissible values;
//! the engine only reads it. The admin process backs this with its product
//! database; tests use [`InMemoryCatalog`].

use shared::models::{Attribute, AttributeValue};
use std::collections::HashMap;

/// Read-only attribute catalog
pub trait AttributeCatalog: Send + Sync {
    /// All attributes, sorted by display order.
    fn list_attributes(&self) -> Vec<Attribute>;

    /// Values for one attribute, in catalog sort order.
    /// Unknown attribute ids yield an empty list.
    fn list_values(&self, attribute_id: i64) -> Vec<AttributeValue>;

    /// Single-attribute lookup; the default scans `list_attributes`.
    fn find_attribute(&self, attribute_id: i64) -> Option<Attribute> {
        self.list_attributes()
            .into_iter()
            .find(|a| a.id == attribute_id)
    }
}

/// In-memory catalog with cached lookup maps
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    attributes: HashMap<i64, Attribute>,
    /// attribute_id -> values sorted by display order
    values: HashMap<i64, Vec<AttributeValue>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_attribute(mut self, attribute: Attribute, values: Vec<AttributeValue>) -> Self {
        self.insert_attribute(attribute, values);
        self
    }

    pub fn insert_attribute(&mut self, attribute: Attribute, mut values: Vec<AttributeValue>) {
        values.sort_by_key(|v| v.display_order);
        self.values.insert(attribute.id, values);
        self.attributes.insert(attribute.id, attribute);
    }

    /// Remove a value from the catalog (concurrent deletion scenario).
    pub fn remove_value(&mut self, attribute_id: i64, value_id: i64) {
        if let Some(values) = self.values.get_mut(&attribute_id) {
            values.retain(|v| v.id != value_id);
        }
    }
}

impl AttributeCatalog for InMemoryCatalog {
    fn list_attributes(&self) -> Vec<Attribute> {
        let mut attrs: Vec<Attribute> = self.attributes.values().cloned().collect();
        attrs.sort_by(|a, b| a.display_order.cmp(&b.display_order).then(a.id.cmp(&b.id)));
        attrs
    }

    fn list_values(&self, attribute_id: i64) -> Vec<AttributeValue> {
        self.values.get(&attribute_id).cloned().unwrap_or_default()
    }

    fn find_attribute(&self, attribute_id: i64) -> Option<Attribute> {
        self.attributes.get(&attribute_id).cloned()
    }
}
