//! Shared application state.

use axum_helpers::JwtAuth;
use database::postgres::DatabaseConnection;

/// Cloned into every router that needs it; all fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool, closed on shutdown
    pub db: DatabaseConnection,
    pub jwt_auth: JwtAuth,
}

impl AppState {
    pub fn new(config: crate::config::Config, db: DatabaseConnection) -> Self {
        let jwt_auth = JwtAuth::new(&config.jwt);
        Self {
            config,
            db,
            jwt_auth,
        }
    }
}
