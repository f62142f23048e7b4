use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::PrincipalData;
use crate::inbound::http::router::AppState;

/// `GET /api/admin/users`
///
/// Lists every registered principal. Reachable only through the admin
/// guard chain.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    let principals = state.store.list_all().await.map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponseData {
            users: principals.iter().map(PrincipalData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub users: Vec<PrincipalData>,
}
