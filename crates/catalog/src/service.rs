//! Validation & mutation core for the stock catalog.

use thiserror::Error;

use beerstock_core::{BeerId, DomainError};

use crate::beer::{Beer, NewBeer};
use crate::store::{BeerStore, StoreError};

/// Result type for stock operations.
pub type StockResult<T> = Result<T, StockError>;

/// Service-level failure, one variant per outward-mappable condition.
///
/// Everything except `NotFound` and `Store` is a deterministic client error;
/// the HTTP boundary maps the kinds accordingly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A record with this name already exists.
    #[error("beer '{0}' is already registered")]
    AlreadyRegistered(String),

    /// No record with the given identifier or name.
    #[error("beer not found")]
    NotFound,

    /// Adjustment amounts must be non-negative.
    #[error("adjustment amount cannot be negative (got {0})")]
    NegativeAmount(i64),

    /// The increment would push quantity above the record's max capacity.
    #[error("incrementing beer {id} by {amount} exceeds its max capacity")]
    MaxCapacityExceeded { id: BeerId, amount: i64 },

    /// The decrement would push quantity below the record's min capacity.
    #[error("decrementing beer {id} by {amount} exceeds its min capacity")]
    MinCapacityExceeded { id: BeerId, amount: i64 },

    /// Field-level validation failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The storage backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DomainError> for StockError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => StockError::NotFound,
            DomainError::Conflict(msg) => StockError::AlreadyRegistered(msg),
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => {
                StockError::Validation(msg)
            }
        }
    }
}

/// The validation & mutation core.
///
/// All business rules live here; the store is a dumb record container.
/// Each operation is a single read-modify-write, atomic from the caller's
/// perspective.
#[derive(Debug, Clone)]
pub struct StockService<S> {
    store: S,
}

impl<S: BeerStore> StockService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a record after uniqueness and field validation.
    ///
    /// Returns the stored record with its storage-assigned identifier.
    pub fn create(&self, beer: NewBeer) -> StockResult<Beer> {
        if self.store.find_by_name(&beer.name)?.is_some() {
            return Err(StockError::AlreadyRegistered(beer.name));
        }
        beer.validate()?;

        let created = self.store.insert(beer)?;
        tracing::info!(id = %created.id, name = %created.name, "beer registered");
        Ok(created)
    }

    /// Look up a record by its unique name.
    pub fn find_by_name(&self, name: &str) -> StockResult<Beer> {
        self.store.find_by_name(name)?.ok_or(StockError::NotFound)
    }

    /// Return every stored record; an empty catalog is not an error.
    pub fn list_all(&self) -> StockResult<Vec<Beer>> {
        Ok(self.store.list_all()?)
    }

    /// Remove a record by identifier.
    pub fn delete_by_id(&self, id: BeerId) -> StockResult<()> {
        if !self.store.delete_by_id(id)? {
            return Err(StockError::NotFound);
        }
        tracing::info!(%id, "beer deleted");
        Ok(())
    }

    /// Raise stock by `amount`, bounded by the record's max capacity.
    ///
    /// Fails without mutating state when the id is unknown, the amount is
    /// negative, or the candidate quantity would exceed `max`.
    pub fn increment(&self, id: BeerId, amount: i64) -> StockResult<Beer> {
        let mut beer = self.get_by_id(id)?;
        ensure_non_negative(amount)?;

        // Overflow is over-capacity by definition (max fits in i64).
        let candidate = beer
            .quantity
            .checked_add(amount)
            .ok_or(StockError::MaxCapacityExceeded { id, amount })?;
        if candidate > beer.max {
            return Err(StockError::MaxCapacityExceeded { id, amount });
        }

        beer.quantity = candidate;
        let saved = self.store.save(beer)?;
        tracing::debug!(%id, amount, quantity = saved.quantity, "stock incremented");
        Ok(saved)
    }

    /// Lower stock by `amount`, bounded by the record's min capacity.
    ///
    /// Fails without mutating state when the id is unknown, the amount is
    /// negative, or the candidate quantity would drop below `min`.
    pub fn decrement(&self, id: BeerId, amount: i64) -> StockResult<Beer> {
        let mut beer = self.get_by_id(id)?;
        ensure_non_negative(amount)?;

        // Underflow is below-min by definition (min fits in i64).
        let candidate = beer
            .quantity
            .checked_sub(amount)
            .ok_or(StockError::MinCapacityExceeded { id, amount })?;
        if candidate < beer.min {
            return Err(StockError::MinCapacityExceeded { id, amount });
        }

        beer.quantity = candidate;
        let saved = self.store.save(beer)?;
        tracing::debug!(%id, amount, quantity = saved.quantity, "stock decremented");
        Ok(saved)
    }

    fn get_by_id(&self, id: BeerId) -> StockResult<Beer> {
        self.store.find_by_id(id)?.ok_or(StockError::NotFound)
    }
}

fn ensure_non_negative(amount: i64) -> StockResult<()> {
    if amount < 0 {
        return Err(StockError::NegativeAmount(amount));
    }
    Ok(())
}
