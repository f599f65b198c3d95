//! Storage capability interface for the catalog.
//!
//! The stock service only ever talks to this trait; concrete backends
//! (in-memory, SQL, ...) live in the infra crate and are injected at
//! construction time.

use thiserror::Error;

use beerstock_core::BeerId;

use crate::beer::{Beer, NewBeer};

/// Storage-layer error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend itself failed (poisoned lock, connection loss, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Single-record persistence for beer records.
///
/// Every method is a single, independent read or write; the store provides
/// whatever native coordination it needs for that (no multi-record
/// transactions are required by the domain).
pub trait BeerStore: Send + Sync {
    /// Look up a record by identifier.
    fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, StoreError>;

    /// Look up a record by its (unique) name.
    fn find_by_name(&self, name: &str) -> Result<Option<Beer>, StoreError>;

    /// Return every stored record.
    fn list_all(&self) -> Result<Vec<Beer>, StoreError>;

    /// Persist a new record, assigning its identifier and timestamps.
    fn insert(&self, beer: NewBeer) -> Result<Beer, StoreError>;

    /// Persist an updated record (refreshes `updated_at`).
    fn save(&self, beer: Beer) -> Result<Beer, StoreError>;

    /// Remove a record; returns `false` when the identifier was unknown.
    fn delete_by_id(&self, id: BeerId) -> Result<bool, StoreError>;
}
