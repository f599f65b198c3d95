use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use beerstock_catalog::{Beer, BeerStore, NewBeer, StoreError};
use beerstock_core::BeerId;

/// In-memory beer store.
///
/// Intended for tests/dev and single-process deployments. Not optimized for
/// performance; every operation takes the whole-map lock.
#[derive(Debug, Default)]
pub struct InMemoryBeerStore {
    records: RwLock<HashMap<BeerId, Beer>>,
}

impl InMemoryBeerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::backend("lock poisoned")
}

impl BeerStore for InMemoryBeerStore {
    fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Beer>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.values().find(|b| b.name == name).cloned())
    }

    fn list_all(&self) -> Result<Vec<Beer>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut all: Vec<Beer> = records.values().cloned().collect();
        // Stable listing order: creation order via time-ordered ids.
        all.sort_by_key(|b| b.id);
        Ok(all)
    }

    fn insert(&self, beer: NewBeer) -> Result<Beer, StoreError> {
        let now = Utc::now();
        let stored = Beer {
            id: BeerId::new(),
            name: beer.name,
            brand: beer.brand,
            style: beer.style,
            quantity: beer.quantity,
            max: beer.max,
            min: beer.min,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn save(&self, mut beer: Beer) -> Result<Beer, StoreError> {
        beer.updated_at = Utc::now();

        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(beer.id, beer.clone());
        Ok(beer)
    }

    fn delete_by_id(&self, id: BeerId) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        Ok(records.remove(&id).is_some())
    }
}
