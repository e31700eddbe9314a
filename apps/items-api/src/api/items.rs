use axum::Router;
use axum_helpers::jwt_auth_middleware;
use domain_items::{SeaOrmItemService, handlers};

/// Item routes backed by PostgreSQL, every one behind the bearer-token gate.
pub fn router(state: &crate::state::AppState) -> Router {
    let service = SeaOrmItemService::new(state.db.clone());

    handlers::router(service).layer(axum::middleware::from_fn_with_state(
        state.jwt_auth.clone(),
        jwt_auth_middleware,
    ))
}
