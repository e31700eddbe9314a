//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs signed with the server secret. The gate only
//! checks that a request carries a valid token; it does not make the
//! decoded claims available to handlers.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/items", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::{JwtConfig, MIN_SECRET_LEN};
pub use jwt::{AuthError, JwtAuth, JwtClaims};
pub use middleware::{AUTH_FAILED_MESSAGE, jwt_auth_middleware};
