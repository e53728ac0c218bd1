use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::domain::WorkoutType;
use crate::errors::WorkoutError;
use crate::middleware::AuthenticatedUser;
use crate::routes::Pagination;

#[derive(Deserialize)]
pub struct CreateWorkoutTypeRequest {
    pub name: String,
    pub muscle_group_id: i32,
}

#[derive(Deserialize)]
pub struct UpdateWorkoutTypeRequest {
    pub name: Option<String>,
    pub muscle_group_id: Option<i32>,
}

#[derive(Serialize)]
pub struct WorkoutTypeResponse {
    pub id: i32,
    pub name: String,
    pub muscle_group_id: i32,
}

impl From<WorkoutType> for WorkoutTypeResponse {
    fn from(wt: WorkoutType) -> Self {
        WorkoutTypeResponse {
            id: wt.id,
            name: wt.name,
            muscle_group_id: wt.muscle_group_id,
        }
    }
}

pub async fn create_workout_type(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Json(request): Json<CreateWorkoutTypeRequest>,
) -> Result<impl IntoResponse, WorkoutError> {
    // The referenced muscle group must exist.
    state
        .muscle_group_store
        .read()
        .await
        .get_by_id(request.muscle_group_id)
        .await?;

    let wt = state
        .workout_type_store
        .write()
        .await
        .add(request.name, request.muscle_group_id)
        .await?;
    Ok((StatusCode::CREATED, Json(WorkoutTypeResponse::from(wt))))
}

pub async fn list_workout_types(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, WorkoutError> {
    let types = state
        .workout_type_store
        .read()
        .await
        .list(pagination.limit(), pagination.offset())
        .await?;
    let response: Vec<WorkoutTypeResponse> =
        types.into_iter().map(WorkoutTypeResponse::from).collect();
    Ok(Json(response))
}

pub async fn get_workout_type(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WorkoutError> {
    let wt = state.workout_type_store.read().await.get_by_id(id).await?;
    Ok(Json(WorkoutTypeResponse::from(wt)))
}

pub async fn update_workout_type(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateWorkoutTypeRequest>,
) -> Result<impl IntoResponse, WorkoutError> {
    if let Some(muscle_group_id) = request.muscle_group_id {
        state
            .muscle_group_store
            .read()
            .await
            .get_by_id(muscle_group_id)
            .await?;
    }

    let wt = state
        .workout_type_store
        .write()
        .await
        .update(id, request.name, request.muscle_group_id)
        .await?;
    Ok(Json(WorkoutTypeResponse::from(wt)))
}

pub async fn delete_workout_type(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WorkoutError> {
    state.workout_type_store.write().await.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
