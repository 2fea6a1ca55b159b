pub mod auth;
pub mod error;
pub mod markers;
pub mod middleware;
pub mod reports;
pub mod state;
pub mod stats;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::middleware::require_admin;
use crate::state::AppState;

/// All routes. Cross-cutting layers (CORS, tracing) are added by the server.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/reports", post(reports::submit_report))
        .route("/api/stats", get(stats::get_stats))
        .route("/api/admin/login", post(auth::login))
        .route("/api/admin/logout", post(auth::logout))
        .route("/api/admin/session", get(auth::session))
        .route("/health", get(stats::health))
        .with_state(state.clone());

    let admin_routes = Router::new()
        .route("/api/admin/reports", get(reports::list_reports))
        .route("/api/admin/reports/{id}", put(reports::update_report))
        .layer(axum_middleware::from_fn(require_admin))
        .with_state(state);

    Router::new().merge(public_routes).merge(admin_routes)
}
