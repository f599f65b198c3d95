use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};

use beerstock_core::BeerId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    // Lookups address records by name, mutations by id; the router needs a
    // single parameter name per position, so the pattern says `:id` for both.
    Router::new()
        .route("/", post(create_beer).get(list_beers))
        .route("/:id", get(find_beer_by_name).delete(delete_beer))
        .route("/:id/increment", patch(increment_stock))
        .route("/:id/decrement", patch(decrement_stock))
}

pub async fn create_beer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateBeerRequest>,
) -> axum::response::Response {
    match services.stock.create(body.into()) {
        Ok(beer) => (StatusCode::CREATED, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn list_beers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.stock.list_all() {
        Ok(beers) => {
            let body: Vec<serde_json::Value> = beers.into_iter().map(dto::beer_to_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn find_beer_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.stock.find_by_name(&name) {
        Ok(beer) => (StatusCode::OK, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn delete_beer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid beer id"),
    };

    match services.stock.delete_by_id(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn increment_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid beer id"),
    };

    match services.stock.increment(id, body.quantity) {
        Ok(beer) => (StatusCode::OK, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn decrement_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid beer id"),
    };

    match services.stock.decrement(id, body.quantity) {
        Ok(beer) => (StatusCode::OK, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}
