use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;

use super::ChangesResponse;
use crate::{
    domain::{ProjectAPIError, ProjectId},
    AppState,
};

/// Removes the project row only. Users listed as members are untouched.
#[tracing::instrument(name = "Delete project route handler", skip_all)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ChangesResponse>), ProjectAPIError> {
    let project_id = ProjectId::parse(&id)?;

    let changes = state
        .project_store
        .write()
        .await
        .delete_project(&project_id)
        .await
        .map_err(|e| ProjectAPIError::StorageError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(ChangesResponse { changes })))
}
