use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::errors::VerifyTokenError;
use crate::services::AuthError;

#[derive(Deserialize)]
pub struct VerifyTokenRequestBody {
    pub token: String,
}

#[derive(Serialize)]
pub struct VerifyTokenResponse {
    pub user_id: i32,
}

pub async fn verify_token(
    State(state): State<AppState>,
    Json(request): Json<VerifyTokenRequestBody>,
) -> Result<impl IntoResponse, VerifyTokenError> {
    let user_id = state
        .auth_service
        .validate(&request.token)
        .await
        .map_err(|e| match e {
            AuthError::InvalidToken => VerifyTokenError::InvalidToken,
            _ => VerifyTokenError::InternalServerError,
        })?;

    Ok((StatusCode::OK, Json(VerifyTokenResponse { user_id })))
}
