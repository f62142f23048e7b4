use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::principal::guards;
use crate::domain::principal::models::Principal;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware for routes that require an authenticated, active principal.
///
/// Extracts the bearer token, resolves it to a principal, applies the
/// active guard, and stores the principal in request extensions for
/// handlers (and further guards) downstream.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let principal = state.resolver.resolve(token).await.map_err(ApiError::from)?;
    let principal = guards::require_active(principal).map_err(ApiError::from)?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Middleware for admin-only routes.
///
/// Must be layered inside `authenticate`: it reads the principal placed in
/// request extensions by that middleware, so the guard chain always runs
/// authenticated → active → admin in order.
pub async fn require_admin(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let principal = req
        .extensions()
        .get::<Principal>()
        .cloned()
        .ok_or_else(|| ApiError::Unauthorized("Could not validate credentials".to_string()))?;

    let principal = guards::require_admin(principal).map_err(ApiError::from)?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}
