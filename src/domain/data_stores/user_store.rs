use super::UserStoreError;
use crate::domain::{Email, NewUser, Password, User, UserUpdate};

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Hashes the password and persists the user. Fails with
    /// `UserAlreadyExists` if the email is taken.
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, UserStoreError>;

    async fn get_user_by_id(&self, id: i32) -> Result<User, UserStoreError>;

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;

    async fn list_users(&self, limit: i64, offset: i64) -> Result<Vec<User>, UserStoreError>;

    async fn update_user(&mut self, id: i32, update: UserUpdate) -> Result<User, UserStoreError>;

    async fn delete_user(&mut self, id: i32) -> Result<(), UserStoreError>;

    /// Looks the user up by email and verifies the password against the
    /// stored hash. Unknown email and wrong password are reported separately
    /// here; callers collapse them before anything reaches a client.
    async fn validate_user(&self, email: &Email, password: &Password)
        -> Result<User, UserStoreError>;
}
