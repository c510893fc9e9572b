use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Project, ProjectAPIError},
    AppState,
};

#[tracing::instrument(name = "Get project list route handler", skip_all)]
pub async fn get_project_list(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ProjectListResponse>), ProjectAPIError> {
    let proyectos = state
        .project_store
        .read()
        .await
        .get_projects()
        .await
        .map_err(|e| ProjectAPIError::StorageError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(ProjectListResponse { proyectos })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub proyectos: Vec<Project>,
}
