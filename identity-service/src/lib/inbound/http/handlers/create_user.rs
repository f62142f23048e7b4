use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PrincipalData;
use crate::domain::principal::models::EmailAddress;
use crate::domain::principal::models::Principal;
use crate::domain::principal::models::PrincipalId;
use crate::domain::principal::models::Role;
use crate::inbound::http::router::AppState;

/// `POST /api/users`
///
/// Registers a new principal. Every registration starts as an active,
/// ordinary user; admin roles are assigned out of band.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequestBody>,
) -> Result<ApiSuccess<PrincipalData>, ApiError> {
    let email = EmailAddress::new(body.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let password_hash = state
        .password_hasher
        .hash(&body.password)
        .map_err(|e| ApiError::InternalServerError(format!("Password hashing failed: {}", e)))?;

    let principal = Principal {
        id: PrincipalId::new(),
        email,
        role: Role::User,
        active: true,
        password_hash,
        created_at: Utc::now(),
    };

    let created = state.store.create(principal).await.map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::CREATED, (&created).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequestBody {
    email: String,
    password: String,
}
