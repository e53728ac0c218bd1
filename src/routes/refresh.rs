use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::errors::RefreshError;
use crate::services::AuthError;

#[derive(Deserialize)]
pub struct RefreshRequestBody {
    pub refresh_token: String,
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequestBody>,
) -> Result<impl IntoResponse, RefreshError> {
    let pair = state
        .auth_service
        .refresh(&request.refresh_token)
        .await
        .map_err(|e| match e {
            AuthError::InvalidToken => RefreshError::InvalidToken,
            _ => RefreshError::InternalServerError,
        })?;

    Ok((StatusCode::OK, Json(pair)))
}
