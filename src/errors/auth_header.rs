use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthHeaderError {
    #[error("missing or invalid authorization header")]
    MissingAuthHeader,

    #[error("invalid or expired token")]
    InvalidToken,
}

impl IntoResponse for AuthHeaderError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}
