//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The slice of product state the variant engine needs.
///
/// The product itself is owned elsewhere; this carries the defaults for
/// freshly minted variants and the id for the save path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductContext {
    pub product_id: i64,
    /// Current base price; default price for newly minted variants.
    pub base_price: Decimal,
    /// Product SKU or slug; default SKU prefix for minted variants.
    /// A placeholder is used when absent.
    pub sku: Option<String>,
}
