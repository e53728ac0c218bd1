use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("suggestion backend unavailable")]
    Upstream,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SuggestError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SuggestError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
            SuggestError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
