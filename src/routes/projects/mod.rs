mod add_member;
mod delete_project;
mod get_member_projects;
mod get_project;
mod get_project_list;
mod new_project;
mod update_project;
mod update_revenue;

pub use add_member::*;
pub use delete_project::*;
pub use get_member_projects::*;
pub use get_project::*;
pub use get_project_list::*;
pub use new_project::*;
pub use update_project::*;
pub use update_revenue::*;
