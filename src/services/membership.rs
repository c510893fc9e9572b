use color_eyre::eyre::{eyre, Report};
use thiserror::Error;

use crate::{
    app_state::{ProjectStoreType, UserStoreType},
    domain::{
        Email, MembershipChange, Project, ProjectId, ProjectStoreError,
        UserId, UserStoreError,
    },
};

#[derive(Debug, Error)]
pub enum MembershipError {
    #[error("User not found")]
    UserNotFound,
    #[error("Project not found")]
    ProjectNotFound,
    #[error("Failed to look up user")]
    UserLookupError(#[source] Report),
    #[error("Failed to update project members")]
    UpdateError(#[source] Report),
}

impl PartialEq for MembershipError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserNotFound, Self::UserNotFound)
                | (Self::ProjectNotFound, Self::ProjectNotFound)
                | (Self::UserLookupError(_), Self::UserLookupError(_))
                | (Self::UpdateError(_), Self::UpdateError(_))
        )
    }
}

/// Adds the user registered under `email` to a project's member list.
///
/// The user is resolved first, so an unknown email wins over an unknown
/// project. The append itself is a single atomic store operation; adding
/// someone who is already a member changes nothing.
#[tracing::instrument(name = "Add member to project", skip_all)]
pub async fn add_member(
    user_store: &UserStoreType,
    project_store: &ProjectStoreType,
    project_id: &ProjectId,
    email: &Email,
) -> Result<MembershipChange, MembershipError> {
    let user = user_store
        .read()
        .await
        .get_user(email)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => MembershipError::UserNotFound,
            e => MembershipError::UserLookupError(eyre!(e)),
        })?;

    let change = project_store
        .write()
        .await
        .add_member(project_id, &user.id)
        .await
        .map_err(|e| match e {
            ProjectStoreError::ProjectNotFound => {
                MembershipError::ProjectNotFound
            }
            e => MembershipError::UpdateError(eyre!(e)),
        })?;

    match &change {
        MembershipChange::Added(_) => {
            tracing::info!(%project_id, user_id = %user.id, "member added")
        }
        MembershipChange::AlreadyMember(_) => {
            tracing::debug!(%project_id, user_id = %user.id, "already a member")
        }
    }

    Ok(change)
}

/// Projects whose member list names `user_id` as a whole token.
#[tracing::instrument(name = "Find projects for member", skip_all)]
pub async fn find_projects_for_member(
    project_store: &ProjectStoreType,
    user_id: &UserId,
) -> Result<Vec<Project>, ProjectStoreError> {
    let projects = project_store.read().await.get_projects().await?;

    Ok(projects
        .into_iter()
        .filter(|project| project.details.member_ids.contains(user_id))
        .collect())
}
