use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::{async_trait, RequestPartsExt};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::app_state::AppState;
use crate::errors::AuthHeaderError;

/// Extractor guarding protected routes: validates the `Authorization: Bearer`
/// access token and exposes the authenticated user id to the handler.
pub struct AuthenticatedUser(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthHeaderError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AuthHeaderError::MissingAuthHeader)?;

        let user_id = state
            .token_service
            .validate_access(bearer.token())
            .map_err(|_| AuthHeaderError::InvalidToken)?;

        Ok(AuthenticatedUser(user_id))
    }
}
