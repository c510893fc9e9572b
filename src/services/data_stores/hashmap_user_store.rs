use std::collections::HashMap;

use crate::domain::{
    Email, NewUser, Password, User, UserId, UserStore, UserStoreError,
};

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<Email, User>,
    last_id: i64,
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        if self.users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        self.last_id += 1;
        let user = user.with_id(UserId::new(self.last_id));
        self.users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        match self.users.get(email) {
            Some(user) => Ok(user.clone()),
            None => Err(UserStoreError::UserNotFound),
        }
    }

    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        match self.users.get(email) {
            Some(user) if password.eq(&user.password) => Ok(user.clone()),
            _ => Err(UserStoreError::InvalidCredentials),
        }
    }

    async fn get_users(&self) -> Result<Vec<User>, UserStoreError> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by_key(|user| *user.id.as_ref());
        Ok(users)
    }
}
