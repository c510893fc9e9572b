mod data_stores;
mod email;
mod error;
mod member_ids;
mod password;
mod project;
mod project_id;
mod user;
mod user_id;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member_ids::*;
pub use password::*;
pub use project::*;
pub use project_id::*;
pub use user::*;
pub use user_id::*;
