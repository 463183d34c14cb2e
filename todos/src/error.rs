//! Error types for the to-do store.

use crate::types::TodoId;
use thiserror::Error;
use todos_runtime::StoreError;

/// Errors surfaced by the to-do store and its handles
#[derive(Error, Debug)]
pub enum TodosError {
    /// The store behind a handle is gone, or its dispatch loop failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An untyped command carried a `type` tag the store does not handle
    #[error("unhandled action: {0}")]
    UnhandledAction(String),

    /// An untyped command could not be decoded
    #[error("malformed action: {0}")]
    MalformedAction(#[source] serde_json::Error),

    /// Two seed records share an id
    #[error("duplicate todo id {0}")]
    DuplicateId(TodoId),

    /// A JSON seed is not a list of todo records
    #[error("invalid seed: {0}")]
    InvalidSeed(#[source] serde_json::Error),
}

impl TodosError {
    /// Returns true if this error means the store scope has ended
    #[must_use]
    pub const fn is_not_initialized(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotInitialized))
    }
}
