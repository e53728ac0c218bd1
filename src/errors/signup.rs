use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must not be empty")]
    InvalidPassword,

    #[error("email is already taken")]
    EmailTaken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SignupError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SignupError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            SignupError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            SignupError::EmailTaken => StatusCode::CONFLICT,
            SignupError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
