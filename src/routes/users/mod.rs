mod get_users;
mod login;
mod signup;

pub use get_users::*;
pub use login::*;
pub use signup::*;
