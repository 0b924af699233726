pub mod health;
pub mod query;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::auth::require_admin;
use crate::companies::handlers as companies;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Reads are open to everyone.
    let public_routes = Router::new()
        .route("/health", get(health::health_handler))
        .route("/companies", get(companies::handle_list_companies))
        .route("/companies/:handle", get(companies::handle_get_company))
        .route("/jobs", get(jobs::handle_list_jobs))
        .route("/jobs/:id", get(jobs::handle_get_job));

    // Mutations need an admin bearer token.
    let admin_routes = Router::new()
        .route("/companies", post(companies::handle_create_company))
        .route(
            "/companies/:handle",
            patch(companies::handle_update_company).delete(companies::handle_remove_company),
        )
        .route("/jobs", post(jobs::handle_create_job))
        .route(
            "/jobs/:id",
            patch(jobs::handle_update_job).delete(jobs::handle_remove_job),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
}
