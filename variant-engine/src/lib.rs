//! Variant Generation & Reconciliation Engine
//!
//! Given a product's variant attributes and the values selected for each,
//! this crate computes the full combinatorial variant space and reconciles
//! it against previously entered variant data so that operator edits
//! (price, stock quantity, SKU) survive selection changes.
//!
//! # Pipeline
//!
//! ```text
//! AttributeSelection change
//!     ├─ 1. classify   → variant vs specification attributes
//!     ├─ 2. generate   → cartesian product of selected values
//!     ├─ 3. reconcile  → match prior variants by slot, mint the rest
//!     └─ 4. (on save) project → variant rows + attribute-value links
//! ```
//!
//! The pipeline is synchronous and re-runs completely after every selection
//! mutation; [`session::EditSession`] drives it and feeds its own prior
//! output back in as the previous variant list. Only the save boundary is
//! async.

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod generator;
pub mod persistence;
pub mod projection;
pub mod reconciler;
pub mod session;

pub use catalog::{AttributeCatalog, InMemoryCatalog};
pub use classifier::{Classification, classify};
pub use error::{EngineError, EngineResult};
pub use generator::{COMBINATION_WARN_THRESHOLD, combination_count, generate};
pub use persistence::{PersistError, VariantPersistenceAdapter};
pub use projection::project;
pub use reconciler::{VariantDefaults, VariantIdAllocator, reconcile};
pub use session::EditSession;
