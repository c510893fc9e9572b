use color_eyre::eyre::Report;
use thiserror::Error;

use super::{
    Email, MemberIds, NewUser, Password, Project, ProjectDetails, ProjectId,
    User, UserId,
};

#[async_trait::async_trait]
pub trait UserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError>;
    async fn get_users(&self) -> Result<Vec<User>, UserStoreError>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Outcome of appending a user to a project's member list.
#[derive(Debug, Clone, PartialEq)]
pub enum MembershipChange {
    Added(MemberIds),
    AlreadyMember(MemberIds),
}

/// Write operations return the number of rows changed; zero means no
/// project had the given id.
#[async_trait::async_trait]
pub trait ProjectStore {
    async fn add_project(
        &mut self,
        details: ProjectDetails,
    ) -> Result<Project, ProjectStoreError>;
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Project, ProjectStoreError>;
    async fn get_projects(&self) -> Result<Vec<Project>, ProjectStoreError>;
    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        details: ProjectDetails,
    ) -> Result<u64, ProjectStoreError>;
    async fn update_estimated_revenue(
        &mut self,
        project_id: &ProjectId,
        estimated_revenue: Option<f64>,
    ) -> Result<u64, ProjectStoreError>;
    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<u64, ProjectStoreError>;
    /// Read, append and write back the member list as one atomic step.
    async fn add_member(
        &mut self,
        project_id: &ProjectId,
        user_id: &UserId,
    ) -> Result<MembershipChange, ProjectStoreError>;
}

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("Project not found")]
    ProjectNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for ProjectStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::ProjectNotFound, Self::ProjectNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
