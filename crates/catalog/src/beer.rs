use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use beerstock_core::{BeerId, DomainError, DomainResult};

/// Closed set of beer categories carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeerStyle {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

/// A stock-tracked catalog record.
///
/// Invariant: `0 <= min <= quantity <= max` after any successful mutation.
/// [`NewBeer::validate`] establishes it at creation; the stock service
/// re-checks the bounds on every adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub id: BeerId,
    pub name: String,
    pub brand: String,
    pub style: BeerStyle,
    pub quantity: i64,
    pub max: i64,
    pub min: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a record (no identifier yet; storage assigns it).
///
/// Field presence is enforced at deserialization time: every field here is
/// mandatory, so a request missing one never reaches the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBeer {
    pub name: String,
    pub brand: String,
    pub style: BeerStyle,
    pub quantity: i64,
    pub max: i64,
    pub min: i64,
}

impl NewBeer {
    /// Validate the would-be record.
    ///
    /// Serde already guarantees presence; this rejects blank strings and
    /// bound configurations that would violate the record invariant.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.brand.trim().is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }
        if self.min < 0 {
            return Err(DomainError::validation("min cannot be negative"));
        }
        if self.min > self.max {
            return Err(DomainError::validation("min cannot exceed max"));
        }
        if self.quantity < self.min || self.quantity > self.max {
            return Err(DomainError::validation(format!(
                "quantity {} outside capacity bounds [{}, {}]",
                self.quantity, self.min, self.max
            )));
        }
        Ok(())
    }
}
