//! Persistence seam
//!
//! On save, the engine hands the final projection to an external adapter
//! that replaces the product's persisted variant rows and links. The
//! adapter may fail or be slow; session state is never mutated while a
//! save is in flight, so a retry re-submits the same snapshot.

use async_trait::async_trait;
use shared::models::VariantProjection;
use thiserror::Error;

/// Persistence adapter errors
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Persistence unavailable: {0}")]
    Unavailable(String),

    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// External variant persistence
#[async_trait]
pub trait VariantPersistenceAdapter: Send + Sync {
    /// Replace the product's variant rows and attribute-value links with
    /// the given write set.
    async fn replace_variants(
        &self,
        product_id: i64,
        projection: &VariantProjection,
    ) -> Result<(), PersistError>;
}
