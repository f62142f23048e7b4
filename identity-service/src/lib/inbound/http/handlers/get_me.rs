use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::PrincipalData;
use crate::domain::principal::models::Principal;

/// `GET /api/users/me`
///
/// Returns the resolved principal for the presented bearer token. The
/// authentication middleware has already run the authenticated → active
/// guard chain and stored the principal in request extensions.
pub async fn get_me(
    Extension(principal): Extension<Principal>,
) -> Result<ApiSuccess<PrincipalData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&principal).into()))
}
