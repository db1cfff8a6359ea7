//! Engine errors
//!
//! The pipeline itself is a pure function of its inputs: incomplete
//! configuration and catalog lookup misses are "not ready", not errors,
//! and identity collisions are prevented structurally. Only the save
//! boundary can fail.

use crate::persistence::PersistError;
use thiserror::Error;

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Save failed: {0}")]
    Save(#[from] PersistError),
}

pub type EngineResult<T> = Result<T, EngineError>;
