use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::middleware::AuthenticatedUser;

// Tokens are stateless and cannot be revoked server-side; logout is the
// client discarding its pair. The handler only confirms the caller was
// authenticated.
pub async fn logout(AuthenticatedUser(_user_id): AuthenticatedUser) -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
