use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use super::ApiError;
use super::ApiSuccess;
use super::PrincipalData;
use crate::inbound::http::router::AppState;

/// `POST /api/auth/login`
///
/// Verifies the submitted credentials and issues an access token with the
/// configured default lifetime. Unknown email and wrong password both
/// produce the same 401 so callers cannot enumerate registered addresses.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let principal = state
        .store
        .find_by_identity(&body.email)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "User store lookup failed during login");
            ApiError::ServiceUnavailable("User lookup unavailable".to_string())
        })?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    if !state
        .password_hasher
        .verify(&body.password, &principal.password_hash)
    {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let mut extra_claims = HashMap::new();
    extra_claims.insert("role".to_string(), json!(principal.role.as_str()));

    let token = state
        .token_codec
        .issue(principal.email.as_str(), extra_claims, None)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            user: (&principal).into(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: PrincipalData,
    pub token: String,
}
