use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use planpick_checkout::{CheckoutForm, format_card_number, format_expiry_date};
use planpick_pricing::SelectionParams;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(submit_checkout))
        .route("/summary", get(checkout_summary))
        .route("/format", post(format_fields))
}

/// Order summary shown beside the checkout form.
pub async fn checkout_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<SelectionParams>,
) -> axum::response::Response {
    match services.checkout().summary(&params) {
        Ok((_, quote)) => (StatusCode::OK, Json(dto::quote_to_json(&quote))).into_response(),
        Err(e) => errors::checkout_error_to_response(e),
    }
}

/// Validate the form and run the simulated payment.
pub async fn submit_checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<SelectionParams>,
    body: Result<Json<CheckoutForm>, JsonRejection>,
) -> axum::response::Response {
    let Json(form) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.checkout().checkout(&params, &form).await {
        Ok(receipt) => (StatusCode::OK, Json(dto::receipt_to_json(&receipt))).into_response(),
        Err(e) => errors::checkout_error_to_response(e),
    }
}

/// As-you-type formatting for card number and expiry.
pub async fn format_fields(
    body: Result<Json<dto::FormatRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "card_number": body.card_number.as_deref().map(format_card_number),
            "expiry_date": body.expiry_date.as_deref().map(format_expiry_date),
        })),
    )
        .into_response()
}
