use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Project, ProjectAPIError, ProjectId, ProjectStoreError},
    AppState,
};

#[tracing::instrument(name = "Get project route handler", skip_all)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ProjectResponse>), ProjectAPIError> {
    let project_id = ProjectId::parse(&id)?;

    let proyecto = state
        .project_store
        .read()
        .await
        .get_project(&project_id)
        .await
        .map_err(|e| match e {
            ProjectStoreError::ProjectNotFound => {
                ProjectAPIError::IDNotFoundError(project_id)
            }
            e => ProjectAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((StatusCode::OK, Json(ProjectResponse { proyecto })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub proyecto: Project,
}
