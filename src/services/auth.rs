use std::sync::Arc;

use thiserror::Error;

use crate::app_state::UserStoreType;
use crate::domain::{Email, NewUser, Password, TokenPair, UserStoreError};
use crate::services::{TokenService, TokenServiceError};

/// High-level authentication workflows: register, login, refresh, validate.
///
/// Thin glue between the user store and the token service; all token rules
/// live in `TokenService`, all persistence in the store.
pub struct AuthService {
    user_store: UserStoreType,
    token_service: Arc<TokenService>,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("email is already taken")]
    EmailTaken,

    // One error for unknown email and wrong password, so responses don't
    // reveal which addresses are registered.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("unexpected authentication failure")]
    Unexpected,
}

impl AuthService {
    pub fn new(user_store: UserStoreType, token_service: Arc<TokenService>) -> Self {
        AuthService {
            user_store,
            token_service,
        }
    }

    /// Create a user and immediately return a freshly minted token pair.
    pub async fn register(
        &self,
        email: Email,
        password: Password,
    ) -> Result<TokenPair, AuthError> {
        if self
            .user_store
            .read()
            .await
            .get_user_by_email(&email)
            .await
            .is_ok()
        {
            return Err(AuthError::EmailTaken);
        }

        let user = self
            .user_store
            .write()
            .await
            .add_user(NewUser::new(String::new(), email, password))
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => AuthError::EmailTaken,
                _ => AuthError::Unexpected,
            })?;

        self.issue_pair(user.id)
    }

    /// Verify credentials and return a new token pair on success.
    pub async fn login(&self, email: Email, password: Password) -> Result<TokenPair, AuthError> {
        let user = self
            .user_store
            .read()
            .await
            .validate_user(&email, &password)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound | UserStoreError::InvalidCredentials => {
                    AuthError::InvalidCredentials
                }
                _ => AuthError::Unexpected,
            })?;

        self.issue_pair(user.id)
    }

    /// Exchange a refresh token for a new pair. Business logic resides in the
    /// token service; just proxy.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        self.token_service.rotate(refresh_token).map_err(|e| match e {
            TokenServiceError::InvalidToken => AuthError::InvalidToken,
            TokenServiceError::Internal(_) => AuthError::Unexpected,
        })
    }

    /// Parse an access token and return the user id if it is valid.
    pub async fn validate(&self, access_token: &str) -> Result<i32, AuthError> {
        self.token_service
            .validate_access(access_token)
            .map_err(|e| match e {
                TokenServiceError::InvalidToken => AuthError::InvalidToken,
                TokenServiceError::Internal(_) => AuthError::Unexpected,
            })
    }

    fn issue_pair(&self, user_id: i32) -> Result<TokenPair, AuthError> {
        self.token_service
            .issue_pair(user_id)
            .map_err(|_| AuthError::Unexpected)
    }
}
