pub mod hashmap_user_store;
pub mod hashmap_workout_store;
pub mod sql_muscle_group_store;
pub mod sql_user_store;
pub mod sql_workout_detail_store;
pub mod sql_workout_session_store;
pub mod sql_workout_type_store;

pub use hashmap_user_store::*;
pub use hashmap_workout_store::*;
pub use sql_muscle_group_store::*;
pub use sql_user_store::*;
pub use sql_workout_detail_store::*;
pub use sql_workout_session_store::*;
pub use sql_workout_type_store::*;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::domain::UserStoreError;

// Argon2 is CPU-bound, so both helpers run on the blocking pool.

pub(crate) async fn hash_password(password: &str) -> Result<String, UserStoreError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| UserStoreError::UnexpectedError)
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}

pub(crate) async fn verify_password(password: &str, hash: &str) -> Result<bool, UserStoreError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(|_| UserStoreError::UnexpectedError)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}
