use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::errors::SuggestError;
use crate::middleware::AuthenticatedUser;

#[derive(Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

const HISTORY_WINDOW: i64 = 10;

pub async fn suggest_workout(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, SuggestError> {
    let sessions = state
        .workout_session_store
        .read()
        .await
        .list_by_user(user_id, HISTORY_WINDOW, 0)
        .await
        .map_err(|_| SuggestError::InternalServerError)?;

    if sessions.is_empty() {
        return Ok(Json(SuggestionResponse {
            suggestion: "No history yet. Start with a full-body beginner routine.".to_string(),
        }));
    }

    let mut parts = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let name = state
            .workout_type_store
            .read()
            .await
            .get_by_id(session.workout_type_id)
            .await
            .map(|wt| wt.name)
            .unwrap_or_else(|_| "Unknown workout".to_string());
        parts.push(format!("Session {}: {}", session.id, name));
    }
    let history = parts.join("\n");

    let suggestion = state.suggester.suggest(&history).await.map_err(|e| {
        log::error!("suggestion request failed: {}", e);
        SuggestError::Upstream
    })?;

    Ok(Json(SuggestionResponse { suggestion }))
}
