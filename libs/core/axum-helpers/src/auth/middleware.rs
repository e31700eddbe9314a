use super::jwt::{AuthError, JwtAuth};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// The only message a client ever sees when authentication fails.
pub const AUTH_FAILED_MESSAGE: &str = "Not authorized, token failed";

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidScheme)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidScheme)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }

    Ok(token)
}

/// Reject any request without a valid `Authorization: Bearer <token>` header.
///
/// Every failure becomes [`AppError::AuthenticationFailed`] with
/// [`AUTH_FAILED_MESSAGE`]; the cause is only logged. The request is passed
/// on untouched when the token verifies.
///
/// ```ignore
/// let protected = Router::new()
///     .route("/items", get(list_items))
///     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match bearer_token(&headers).and_then(|token| auth.verify_token(token)) {
        Ok(_) => Ok(next.run(request).await),
        Err(AuthError::MissingSecret) => {
            tracing::error!("JWT secret is not configured, rejecting request");
            Err(AppError::AuthenticationFailed(AUTH_FAILED_MESSAGE.to_string()))
        }
        Err(e) => {
            tracing::debug!(error = %e, "JWT authentication failed");
            Err(AppError::AuthenticationFailed(AUTH_FAILED_MESSAGE.to_string()))
        }
    }
}
