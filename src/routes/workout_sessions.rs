use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::domain::{WorkoutDetail, WorkoutSession};
use crate::errors::WorkoutError;
use crate::middleware::AuthenticatedUser;
use crate::routes::Pagination;

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub workout_type_id: i32,
    // Defaults to "now" when omitted.
    pub datetime: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct SessionDetailRequest {
    pub name: String,
    pub value: String,
}

#[derive(Serialize)]
pub struct SessionDetailResponse {
    pub id: i32,
    pub name: String,
    pub value: String,
}

impl From<WorkoutDetail> for SessionDetailResponse {
    fn from(d: WorkoutDetail) -> Self {
        SessionDetailResponse {
            id: d.id,
            name: d.detail_name,
            value: d.detail_value,
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub id: i32,
    pub user_id: i32,
    pub workout_type_id: i32,
    pub datetime: DateTime<Utc>,
    pub details: Vec<SessionDetailResponse>,
}

impl SessionResponse {
    fn new(session: WorkoutSession, details: Vec<WorkoutDetail>) -> Self {
        SessionResponse {
            id: session.id,
            user_id: session.user_id,
            workout_type_id: session.workout_type_id,
            datetime: DateTime::from_timestamp(session.datetime, 0).unwrap_or_else(Utc::now),
            details: details.into_iter().map(SessionDetailResponse::from).collect(),
        }
    }
}

// Loads a session and enforces ownership; foreign sessions answer 404 so ids
// are not probeable.
async fn owned_session(
    state: &AppState,
    session_id: i32,
    user_id: i32,
) -> Result<WorkoutSession, WorkoutError> {
    let session = state
        .workout_session_store
        .read()
        .await
        .get_by_id(session_id)
        .await?;
    if session.user_id != user_id {
        return Err(WorkoutError::NotFound);
    }
    Ok(session)
}

pub async fn create_session(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, WorkoutError> {
    // The referenced workout type must exist.
    state
        .workout_type_store
        .read()
        .await
        .get_by_id(request.workout_type_id)
        .await?;

    let datetime = request.datetime.unwrap_or_else(Utc::now).timestamp();
    let session = state
        .workout_session_store
        .write()
        .await
        .add(user_id, request.workout_type_id, datetime)
        .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse::new(session, Vec::new()))))
}

pub async fn list_sessions(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, WorkoutError> {
    let sessions = state
        .workout_session_store
        .read()
        .await
        .list_by_user(user_id, pagination.limit(), pagination.offset())
        .await?;

    let mut response = Vec::with_capacity(sessions.len());
    for session in sessions {
        let details = state
            .workout_detail_store
            .read()
            .await
            .list_by_session(session.id)
            .await?;
        response.push(SessionResponse::new(session, details));
    }
    Ok(Json(response))
}

pub async fn get_session(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WorkoutError> {
    let session = owned_session(&state, id, user_id).await?;
    let details = state
        .workout_detail_store
        .read()
        .await
        .list_by_session(session.id)
        .await?;
    Ok(Json(SessionResponse::new(session, details)))
}

pub async fn delete_session(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WorkoutError> {
    owned_session(&state, id, user_id).await?;
    state.workout_session_store.write().await.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_session_detail(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<SessionDetailRequest>,
) -> Result<impl IntoResponse, WorkoutError> {
    let session = owned_session(&state, id, user_id).await?;

    let detail = state
        .workout_detail_store
        .write()
        .await
        .add(session.id, request.name, request.value)
        .await?;

    Ok((StatusCode::CREATED, Json(SessionDetailResponse::from(detail))))
}
