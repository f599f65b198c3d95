//! Service wiring: construct the stock service over its storage backend.

use beerstock_catalog::StockService;
use beerstock_infra::InMemoryBeerStore;

/// Shared application services, injected into handlers via `Extension`.
pub struct AppServices {
    pub stock: StockService<InMemoryBeerStore>,
}

/// Wire up the storage backend and the validation core.
pub fn build_services() -> AppServices {
    AppServices {
        stock: StockService::new(InMemoryBeerStore::new()),
    }
}
