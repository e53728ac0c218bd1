use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::domain::{Email, Password};
use crate::errors::SignupError;
use crate::services::AuthError;

#[derive(Deserialize)]
pub struct SignupRequestBody {
    pub email: String,
    pub password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequestBody>,
) -> Result<impl IntoResponse, SignupError> {
    let email = Email::parse(request.email).or(Err(SignupError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(SignupError::InvalidPassword))?;

    let pair = state
        .auth_service
        .register(email, password)
        .await
        .map_err(|e| match e {
            AuthError::EmailTaken => SignupError::EmailTaken,
            _ => SignupError::InternalServerError,
        })?;

    Ok((StatusCode::CREATED, Json(pair)))
}
