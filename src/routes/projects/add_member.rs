use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        Email, MembershipChange, ProjectAPIError, ProjectId, ValidationError,
    },
    services::membership::{self, MembershipError},
    AppState,
};

#[tracing::instrument(name = "Add member to project route handler", skip_all)]
pub async fn add_member(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<AddMemberRequest>,
        ProjectAPIError,
    >,
) -> Result<(StatusCode, Json<AddMemberResponse>), ProjectAPIError> {
    let project_id = match request.project_id {
        IdField::Number(id) => id.as_i64().map(ProjectId::new).ok_or_else(|| {
            ValidationError::new(format!("Invalid project ID: {id}"))
        })?,
        IdField::Text(id) => ProjectId::parse(&id)?,
    };
    let email = Email::new(request.email);

    let change = membership::add_member(
        &state.user_store,
        &state.project_store,
        &project_id,
        &email,
    )
    .await
    .map_err(|e| match e {
        MembershipError::UserNotFound => ProjectAPIError::UserNotFound,
        MembershipError::ProjectNotFound => {
            ProjectAPIError::IDNotFoundError(project_id)
        }
        e @ MembershipError::UserLookupError(_) => {
            ProjectAPIError::UnexpectedError(eyre!(e))
        }
        e @ MembershipError::UpdateError(_) => {
            ProjectAPIError::StorageError(eyre!(e))
        }
    })?;

    let message = match change {
        MembershipChange::Added(_) => "User added to project successfully",
        MembershipChange::AlreadyMember(_) => {
            "User is already a member of the project"
        }
    };

    let response = Json(AddMemberResponse {
        message: message.to_owned(),
    });

    Ok((StatusCode::OK, response))
}

/// The project id may arrive as a JSON number or as a numeric string.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdField {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AddMemberRequest {
    #[serde(rename = "projectId")]
    pub project_id: IdField,
    pub email: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AddMemberResponse {
    pub message: String,
}
