use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::domain::{Email, NewUser, Password, User, UserStoreError, UserUpdate};
use crate::errors::UsersError;
use crate::routes::Pagination;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// Shape of user JSON responses; never carries the password hash.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email.as_ref().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<UserStoreError> for UsersError {
    fn from(e: UserStoreError) -> Self {
        match e {
            UserStoreError::UserNotFound => UsersError::NotFound,
            UserStoreError::UserAlreadyExists => UsersError::EmailTaken,
            _ => UsersError::InternalServerError,
        }
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, UsersError> {
    let email = Email::parse(request.email).or(Err(UsersError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(UsersError::InvalidPassword))?;

    let user = state
        .user_store
        .write()
        .await
        .add_user(NewUser::new(request.name, email, password))
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, UsersError> {
    let users = state
        .user_store
        .read()
        .await
        .list_users(pagination.limit(), pagination.offset())
        .await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(response))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, UsersError> {
    let user = state.user_store.read().await.get_user_by_id(id).await?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, UsersError> {
    let email = match request.email {
        Some(raw) => Some(Email::parse(raw).or(Err(UsersError::InvalidEmail))?),
        None => None,
    };
    let password = match request.password {
        Some(raw) => Some(Password::parse(raw).or(Err(UsersError::InvalidPassword))?),
        None => None,
    };

    let update = UserUpdate {
        name: request.name,
        email,
        password,
    };

    let user = state.user_store.write().await.update_user(id, update).await?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, UsersError> {
    state.user_store.write().await.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
