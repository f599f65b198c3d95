use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use beerstock_catalog::StockError;

/// Map a service-level failure to an HTTP response.
///
/// Policy: `NotFound` → 404, backend failures → 500, every other
/// (deterministic, caller-recoverable) kind → 400.
pub fn stock_error_to_response(err: StockError) -> axum::response::Response {
    match err {
        StockError::AlreadyRegistered(name) => json_error(
            StatusCode::BAD_REQUEST,
            "already_registered",
            format!("beer '{name}' is already registered"),
        ),
        StockError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "beer not found"),
        StockError::NegativeAmount(amount) => json_error(
            StatusCode::BAD_REQUEST,
            "negative_amount",
            format!("adjustment amount cannot be negative (got {amount})"),
        ),
        StockError::MaxCapacityExceeded { .. } | StockError::MinCapacityExceeded { .. } => {
            json_error(StatusCode::BAD_REQUEST, "capacity_exceeded", err.to_string())
        }
        StockError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        StockError::Store(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            e.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
