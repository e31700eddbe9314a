//! # Axum Helpers
//!
//! Shared HTTP plumbing for the items service.
//!
//! - **[`errors`]**: the [`AppError`] taxonomy and its single translation to HTTP
//! - **[`auth`]**: bearer-token (HS256 JWT) gate
//! - **[`extractors`]**: [`ValidatedJson`] and [`IdPath`], rejecting with [`AppError`]
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(api_routes);
//! let config = ServerConfig::default();
//! create_production_app(router, &config, config.shutdown_timeout(), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

pub use auth::{AUTH_FAILED_MESSAGE, AuthError, JwtAuth, JwtClaims, JwtConfig, jwt_auth_middleware};
pub use errors::{AppError, ErrorResponse, UNCLASSIFIED_MESSAGE};
pub use extractors::{IdPath, ValidatedJson};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
