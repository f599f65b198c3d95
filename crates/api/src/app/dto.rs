use serde::Deserialize;

use beerstock_catalog::{Beer, BeerStyle, NewBeer};

// -------------------------
// Request DTOs
// -------------------------

/// Create request; every field is mandatory, so a missing one fails
/// deserialization and never reaches the domain layer.
#[derive(Debug, Deserialize)]
pub struct CreateBeerRequest {
    pub name: String,
    pub brand: String,
    pub style: BeerStyle,
    pub quantity: i64,
    pub max: i64,
    pub min: i64,
}

impl From<CreateBeerRequest> for NewBeer {
    fn from(req: CreateBeerRequest) -> Self {
        NewBeer {
            name: req.name,
            brand: req.brand,
            style: req.style,
            quantity: req.quantity,
            max: req.max,
            min: req.min,
        }
    }
}

/// Body of increment/decrement requests.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn beer_to_json(beer: Beer) -> serde_json::Value {
    serde_json::json!({
        "id": beer.id.to_string(),
        "name": beer.name,
        "brand": beer.brand,
        "style": beer.style,
        "quantity": beer.quantity,
        "max": beer.max,
        "min": beer.min,
        "created_at": beer.created_at.to_rfc3339(),
        "updated_at": beer.updated_at.to_rfc3339(),
    })
}
