use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::domain::{Email, Password};
use crate::errors::LoginError;
use crate::services::AuthError;

#[derive(Deserialize)]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;

    let pair = state
        .auth_service
        .login(email, password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => LoginError::InvalidCredentials,
            _ => LoginError::InternalServerError,
        })?;

    Ok((StatusCode::OK, Json(pair)))
}
