use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ProjectAPIError, ProjectDetails, ProjectId},
    AppState,
};

/// Replaces every field of the project, member list included.
#[tracing::instrument(name = "Update project route handler", skip_all)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(request), _): WithRejection<
        Json<ProjectDetails>,
        ProjectAPIError,
    >,
) -> Result<(StatusCode, Json<ChangesResponse>), ProjectAPIError> {
    let project_id = ProjectId::parse(&id)?;

    let changes = state
        .project_store
        .write()
        .await
        .update_project(&project_id, request)
        .await
        .map_err(|e| ProjectAPIError::StorageError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(ChangesResponse { changes })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangesResponse {
    pub changes: u64,
}
