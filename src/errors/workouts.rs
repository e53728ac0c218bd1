use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::WorkoutStoreError;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("not found")]
    NotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<WorkoutStoreError> for WorkoutError {
    fn from(e: WorkoutStoreError) -> Self {
        match e {
            WorkoutStoreError::NotFound => WorkoutError::NotFound,
            _ => WorkoutError::InternalServerError,
        }
    }
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            WorkoutError::NotFound => StatusCode::NOT_FOUND,
            WorkoutError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
