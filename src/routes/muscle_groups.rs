use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::domain::MuscleGroup;
use crate::errors::WorkoutError;
use crate::middleware::AuthenticatedUser;
use crate::routes::Pagination;

#[derive(Deserialize)]
pub struct MuscleGroupRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct MuscleGroupResponse {
    pub id: i32,
    pub name: String,
}

impl From<MuscleGroup> for MuscleGroupResponse {
    fn from(mg: MuscleGroup) -> Self {
        MuscleGroupResponse {
            id: mg.id,
            name: mg.name,
        }
    }
}

pub async fn create_muscle_group(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Json(request): Json<MuscleGroupRequest>,
) -> Result<impl IntoResponse, WorkoutError> {
    let mg = state
        .muscle_group_store
        .write()
        .await
        .add(request.name)
        .await?;
    Ok((StatusCode::CREATED, Json(MuscleGroupResponse::from(mg))))
}

pub async fn list_muscle_groups(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, WorkoutError> {
    let groups = state
        .muscle_group_store
        .read()
        .await
        .list(pagination.limit(), pagination.offset())
        .await?;
    let response: Vec<MuscleGroupResponse> =
        groups.into_iter().map(MuscleGroupResponse::from).collect();
    Ok(Json(response))
}

pub async fn get_muscle_group(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WorkoutError> {
    let mg = state.muscle_group_store.read().await.get_by_id(id).await?;
    Ok(Json(MuscleGroupResponse::from(mg)))
}

pub async fn update_muscle_group(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<MuscleGroupRequest>,
) -> Result<impl IntoResponse, WorkoutError> {
    let mg = state
        .muscle_group_store
        .write()
        .await
        .update(id, request.name)
        .await?;
    Ok(Json(MuscleGroupResponse::from(mg)))
}

pub async fn delete_muscle_group(
    AuthenticatedUser(_): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WorkoutError> {
    state.muscle_group_store.write().await.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
