use serde::Serialize;

use super::{Email, Password, UserId};

/// A signup request that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: Password,
}

impl NewUser {
    pub fn new(name: String, email: Email, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }

    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(skip)]
    pub password: Password,
}
