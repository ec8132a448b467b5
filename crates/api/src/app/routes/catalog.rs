use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn list_plans(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::BillingQuery>,
) -> axum::response::Response {
    let mode = match errors::parse_billing_mode(query.billing.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let items = services
        .catalog()
        .list_plans()
        .iter()
        .map(|plan| dto::plan_to_json(plan, mode))
        .collect::<Vec<_>>();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "billing_mode": mode, "items": items })),
    )
        .into_response()
}

pub async fn get_plan(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<dto::BillingQuery>,
) -> axum::response::Response {
    let mode = match errors::parse_billing_mode(query.billing.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    match services.catalog().find_plan(&id) {
        Some(plan) => (StatusCode::OK, Json(dto::plan_to_json(plan, mode))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "plan not found"),
    }
}

pub async fn list_addons(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::BillingQuery>,
) -> axum::response::Response {
    let mode = match errors::parse_billing_mode(query.billing.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let items = services
        .catalog()
        .list_addons()
        .iter()
        .map(|addon| dto::addon_to_json(addon, mode))
        .collect::<Vec<_>>();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "billing_mode": mode, "items": items })),
    )
        .into_response()
}
