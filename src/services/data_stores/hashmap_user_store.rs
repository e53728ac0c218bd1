use std::collections::HashMap;

use axum::async_trait;
use chrono::Utc;

use super::{hash_password, verify_password};
use crate::domain::{Email, NewUser, Password, User, UserStore, UserStoreError, UserUpdate};

struct StoredUser {
    user: User,
    password_hash: String,
}

/// In-memory user store for tests and local runs. Hashes passwords with the
/// same argon2 helpers as the SQL store so login behaves identically.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<i32, StoredUser>,
    next_id: i32,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn find_by_email(&self, email: &Email) -> Option<&StoredUser> {
        self.users.values().find(|s| &s.user.email == email)
    }
}

#[async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, UserStoreError> {
        if self.find_by_email(&new_user.email).is_some() {
            return Err(UserStoreError::UserAlreadyExists);
        }

        self.next_id += 1;
        let user = User {
            id: self.next_id,
            name: new_user.name,
            email: new_user.email,
            created_at: Utc::now().timestamp(),
        };
        let password_hash = hash_password(new_user.password.as_ref()).await?;

        self.users.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                password_hash,
            },
        );
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, UserStoreError> {
        self.users
            .get(&id)
            .map(|s| s.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.find_by_email(email)
            .map(|s| s.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn list_users(&self, limit: i64, offset: i64) -> Result<Vec<User>, UserStoreError> {
        let mut users: Vec<User> = self.users.values().map(|s| s.user.clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn update_user(&mut self, id: i32, update: UserUpdate) -> Result<User, UserStoreError> {
        let new_hash = match &update.password {
            Some(password) => Some(hash_password(password.as_ref()).await?),
            None => None,
        };

        let stored = self.users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        if let Some(name) = update.name {
            stored.user.name = name;
        }
        if let Some(email) = update.email {
            stored.user.email = email;
        }
        if let Some(hash) = new_hash {
            stored.password_hash = hash;
        }
        Ok(stored.user.clone())
    }

    async fn delete_user(&mut self, id: i32) -> Result<(), UserStoreError> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let stored = self.find_by_email(email).ok_or(UserStoreError::UserNotFound)?;
        if verify_password(password.as_ref(), &stored.password_hash).await? {
            Ok(stored.user.clone())
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }
}
