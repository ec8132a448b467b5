use axum::{
    routing::{get, post},
    Router,
};

pub mod catalog;
pub mod checkout;
pub mod pricing;
pub mod system;

/// Router for all catalog, pricing and checkout endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/plans", get(catalog::list_plans))
        .route("/plans/:id", get(catalog::get_plan))
        .route("/addons", get(catalog::list_addons))
        .route("/quote", get(pricing::get_quote))
        .route("/selection", get(pricing::default_selection))
        .route("/selection/link", post(pricing::selection_link))
        .nest("/checkout", checkout::router())
}
