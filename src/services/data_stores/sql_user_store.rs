use axum::async_trait;
use chrono::Utc;
use welds::connections::any::AnyClient;
use welds::prelude::DbState;

use super::{hash_password, verify_password};
use crate::domain::{Email, NewUser, Password, User, UserModel, UserStore, UserStoreError, UserUpdate};

pub struct SqlUserStore {
    client: AnyClient,
}

impl SqlUserStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    fn to_domain(model: &UserModel) -> Result<User, UserStoreError> {
        let email =
            Email::parse(model.email.clone()).map_err(|_| UserStoreError::UnexpectedError)?;
        Ok(User {
            id: model.id,
            name: model.name.clone(),
            email,
            created_at: model.created_at,
        })
    }

    async fn fetch_by_email(&self, email: &Email) -> Result<DbState<UserModel>, UserStoreError> {
        UserModel::where_col(|u| u.email.equal(email.as_ref()))
            .fetch_one(&self.client)
            .await
            .map_err(|_| UserStoreError::UserNotFound)
    }

    async fn fetch_by_id(&self, id: i32) -> Result<DbState<UserModel>, UserStoreError> {
        UserModel::find_by_id(&self.client, id)
            .await
            .map_err(|e| {
                log::error!("database error fetching user {}: {}", id, e);
                UserStoreError::UnexpectedError
            })?
            .ok_or(UserStoreError::UserNotFound)
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, UserStoreError> {
        if self.fetch_by_email(&new_user.email).await.is_ok() {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let mut model = UserModel::new();
        model.name = new_user.name;
        model.email = new_user.email.as_ref().to_string();
        model.password_hash = hash_password(new_user.password.as_ref()).await?;
        model.created_at = Utc::now().timestamp();

        model.save(&self.client).await.map_err(|e| {
            log::error!("database error creating user: {}", e);
            UserStoreError::UnexpectedError
        })?;

        Self::to_domain(&model)
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, UserStoreError> {
        let model = self.fetch_by_id(id).await?;
        Self::to_domain(&model)
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let model = self.fetch_by_email(email).await?;
        Self::to_domain(&model)
    }

    async fn list_users(&self, limit: i64, offset: i64) -> Result<Vec<User>, UserStoreError> {
        let models = UserModel::all()
            .limit(limit)
            .offset(offset)
            .run(&self.client)
            .await
            .map_err(|e| {
                log::error!("database error listing users: {}", e);
                UserStoreError::UnexpectedError
            })?;

        models.iter().map(|m| Self::to_domain(m)).collect()
    }

    async fn update_user(&mut self, id: i32, update: UserUpdate) -> Result<User, UserStoreError> {
        let mut model = self.fetch_by_id(id).await?;

        if let Some(name) = update.name {
            model.name = name;
        }
        if let Some(email) = update.email {
            model.email = email.as_ref().to_string();
        }
        if let Some(password) = update.password {
            model.password_hash = hash_password(password.as_ref()).await?;
        }

        model.save(&self.client).await.map_err(|e| {
            log::error!("database error updating user {}: {}", id, e);
            UserStoreError::UnexpectedError
        })?;

        Self::to_domain(&model)
    }

    async fn delete_user(&mut self, id: i32) -> Result<(), UserStoreError> {
        let mut model = self.fetch_by_id(id).await?;
        model
            .delete(&self.client)
            .await
            .map_err(|_| UserStoreError::UnexpectedError)?;
        Ok(())
    }

    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let model = self.fetch_by_email(email).await?;

        if verify_password(password.as_ref(), &model.password_hash).await? {
            Self::to_domain(&model)
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }
}
