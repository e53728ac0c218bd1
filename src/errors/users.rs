use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsersError {
    #[error("user not found")]
    NotFound,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must not be empty")]
    InvalidPassword,

    #[error("email is already taken")]
    EmailTaken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for UsersError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            UsersError::NotFound => StatusCode::NOT_FOUND,
            UsersError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            UsersError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            UsersError::EmailTaken => StatusCode::CONFLICT,
            UsersError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
