use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use planpick_catalog::BillingMode;
use planpick_checkout::CheckoutError;
use planpick_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn checkout_error_to_response(err: CheckoutError) -> axum::response::Response {
    match err {
        CheckoutError::Selection(e) => json_error(StatusCode::BAD_REQUEST, "invalid_selection", e.to_string()),
        CheckoutError::UnknownPlan(id) => {
            json_error(StatusCode::NOT_FOUND, "unknown_plan", format!("plan '{id}' is not available"))
        }
        CheckoutError::InvalidForm(fields) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "validation_error",
                "message": "please correct the highlighted fields",
                "fields": fields,
            })),
        )
            .into_response(),
    }
}

/// Unreadable or mistyped JSON bodies, reported in the standard envelope.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
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

/// Missing or empty means monthly; anything but `monthly`/`yearly` is a 400.
pub fn parse_billing_mode(raw: Option<&str>) -> Result<BillingMode, axum::response::Response> {
    match raw.map(str::trim) {
        None | Some("") => Ok(BillingMode::default()),
        Some(s) => s.parse().map_err(|_| {
            json_error(
                StatusCode::BAD_REQUEST,
                "invalid_billing_mode",
                "billing must be one of: monthly, yearly",
            )
        }),
    }
}
