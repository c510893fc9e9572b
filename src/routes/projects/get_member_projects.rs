use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;

use super::ProjectListResponse;
use crate::{
    domain::{ProjectAPIError, UserId},
    services::membership::find_projects_for_member,
    AppState,
};

#[tracing::instrument(name = "Get projects for member route handler", skip_all)]
pub async fn get_member_projects(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<ProjectListResponse>), ProjectAPIError> {
    let user_id = UserId::parse(&user_id)?;

    let proyectos = find_projects_for_member(&state.project_store, &user_id)
        .await
        .map_err(|e| ProjectAPIError::StorageError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(ProjectListResponse { proyectos })))
}
