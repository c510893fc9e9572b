use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{ProjectStore, UserStore};
pub type UserStoreType = Arc<RwLock<dyn UserStore + Send + Sync>>;
pub type ProjectStoreType = Arc<RwLock<dyn ProjectStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub project_store: ProjectStoreType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        project_store: ProjectStoreType,
    ) -> Self {
        Self {
            user_store,
            project_store,
        }
    }
}
