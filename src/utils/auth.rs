use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::domain::Claims;

/// Failure modes when recovering claims from a token string.
///
/// Callers above the codec (the token service) collapse all three into one
/// opaque error; the distinction only exists at this layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenCodecError {
    #[error("token is not a well-formed JWT")]
    Malformed,

    #[error("token signature does not verify")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,
}

// Sign claims into the standard three-segment compact form (HS256).
pub fn encode_claims(claims: &Claims, secret: &[u8]) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret),
    )
}

/// Decode and verify a token string against `secret`.
///
/// Verification covers the signature and the `exp` claim (no leeway, so a
/// token is rejected from the exact second it expires). A payload that parses
/// but is missing `user_id` or `type` is malformed, not silently accepted.
pub fn decode_claims(token: &str, secret: &[u8]) -> Result<Claims, TokenCodecError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenCodecError::SignatureInvalid,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenCodecError::Expired,
            _ => TokenCodecError::Malformed,
        })
}
