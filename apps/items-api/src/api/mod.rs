use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::state::AppState;

pub mod health;
pub mod items;

/// The full service: API routes plus `/health` and `/ready`, wrapped with
/// docs, request tracing and the JSON 404 fallback.
pub fn app(state: &AppState) -> Router {
    let routes = routes(state)
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()));

    create_router::<crate::openapi::ApiDoc>(routes)
}

/// All API routes, with state already applied.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}

/// `/ready`, checking the database connection.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
