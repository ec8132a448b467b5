use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use planpick_pricing::{Selection, SelectionParams};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Quote for shareable parameters (`?plan=&billing=&addons=`).
pub async fn get_quote(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<SelectionParams>,
) -> axum::response::Response {
    let selection = match Selection::from_params(&params) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match selection.quote(services.catalog()) {
        Some(quote) => (StatusCode::OK, Json(dto::quote_to_json(&quote))).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "unknown_plan",
            format!("plan '{}' is not available", selection.plan_id()),
        ),
    }
}

/// Initial selection for a visitor entering the selector.
pub async fn default_selection(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let selection = services.default_selection();
    (
        StatusCode::OK,
        Json(dto::selection_to_json(&selection, services.catalog())),
    )
        .into_response()
}

/// Turn a selection into the shareable checkout link.
pub async fn selection_link(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SelectionLinkRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    if body.plan_id.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "plan_id is required");
    }

    let selection = body.into_selection();
    if !services.catalog().contains_plan(selection.plan_id().as_str()) {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "unknown_plan",
            format!("plan '{}' is not available", selection.plan_id()),
        );
    }

    (
        StatusCode::OK,
        Json(dto::selection_to_json(&selection, services.catalog())),
    )
        .into_response()
}
