use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use color_eyre::eyre::eyre;

use crate::{
    domain::{Project, ProjectAPIError, ProjectDetails},
    AppState,
};

#[tracing::instrument(name = "Create new project route handler", skip_all)]
pub async fn new_project(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<ProjectDetails>,
        ProjectAPIError,
    >,
) -> Result<(StatusCode, Json<Project>), ProjectAPIError> {
    let project = state
        .project_store
        .write()
        .await
        .add_project(request)
        .await
        .map_err(|e| ProjectAPIError::StorageError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(project)))
}
