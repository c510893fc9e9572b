use std::collections::BTreeMap;

use crate::domain::{
    MembershipChange, Project, ProjectDetails, ProjectId, ProjectStore,
    ProjectStoreError, UserId,
};

#[derive(Default)]
pub struct HashmapProjectStore {
    projects: BTreeMap<i64, ProjectDetails>,
    last_id: i64,
}

impl HashmapProjectStore {
    fn changed(found: bool) -> u64 {
        if found {
            1
        } else {
            0
        }
    }
}

#[async_trait::async_trait]
impl ProjectStore for HashmapProjectStore {
    async fn add_project(
        &mut self,
        details: ProjectDetails,
    ) -> Result<Project, ProjectStoreError> {
        self.last_id += 1;
        self.projects.insert(self.last_id, details.clone());
        Ok(Project::new(ProjectId::new(self.last_id), details))
    }

    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        self.projects
            .get(project_id.as_ref())
            .map(|details| Project::new(*project_id, details.clone()))
            .ok_or(ProjectStoreError::ProjectNotFound)
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ProjectStoreError> {
        Ok(self
            .projects
            .iter()
            .map(|(id, details)| {
                Project::new(ProjectId::new(*id), details.clone())
            })
            .collect())
    }

    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        details: ProjectDetails,
    ) -> Result<u64, ProjectStoreError> {
        let stored = self.projects.get_mut(project_id.as_ref());
        let found = stored.is_some();
        if let Some(stored) = stored {
            *stored = details;
        }
        Ok(Self::changed(found))
    }

    async fn update_estimated_revenue(
        &mut self,
        project_id: &ProjectId,
        estimated_revenue: Option<f64>,
    ) -> Result<u64, ProjectStoreError> {
        let stored = self.projects.get_mut(project_id.as_ref());
        let found = stored.is_some();
        if let Some(stored) = stored {
            stored.estimated_revenue = estimated_revenue;
        }
        Ok(Self::changed(found))
    }

    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<u64, ProjectStoreError> {
        Ok(Self::changed(
            self.projects.remove(project_id.as_ref()).is_some(),
        ))
    }

    async fn add_member(
        &mut self,
        project_id: &ProjectId,
        user_id: &UserId,
    ) -> Result<MembershipChange, ProjectStoreError> {
        let stored = self
            .projects
            .get_mut(project_id.as_ref())
            .ok_or(ProjectStoreError::ProjectNotFound)?;

        if stored.member_ids.push_unique(user_id) {
            Ok(MembershipChange::Added(stored.member_ids.clone()))
        } else {
            Ok(MembershipChange::AlreadyMember(stored.member_ids.clone()))
        }
    }
}
