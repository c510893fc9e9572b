use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::Serialize;

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, User},
};

#[tracing::instrument(name = "Get users route handler", skip_all)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<UserListResponse>), AuthAPIError> {
    let usuarios = state
        .user_store
        .read()
        .await
        .get_users()
        .await
        .map_err(|e| AuthAPIError::StorageError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(UserListResponse { usuarios })))
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub usuarios: Vec<User>,
}
