use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("invalid token")]
    InvalidToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RefreshError::InvalidToken => StatusCode::UNAUTHORIZED,
            RefreshError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
