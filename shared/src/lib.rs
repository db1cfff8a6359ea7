//! Shared types for the storefront admin
//!
//! Data models exchanged between the variant engine, the admin UI and the
//! persistence layer. All IDs are `i64`; monetary fields use
//! `rust_decimal::Decimal`.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
