//! Data models
//!
//! Shared between the variant engine and the admin frontend (via API).
//! Attribute and value IDs are catalog-owned; variant IDs are minted by
//! the engine's session allocator.

pub mod attribute;
pub mod product;
pub mod selection;
pub mod variant;

// Re-exports
pub use attribute::*;
pub use product::*;
pub use selection::*;
pub use variant::*;
