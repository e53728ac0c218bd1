use serde::{Deserialize, Serialize};

/// Distinguishes access tokens from refresh tokens inside the signed payload.
///
/// The kind is part of the claims so that a token minted for one operation
/// can never be replayed against the other, even if both secrets were
/// (mistakenly) configured to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT payload shared by access and refresh tokens.
///
/// Wire format: `user_id` (integer), `type` ("access"/"refresh"), `iat` and
/// `exp` as epoch seconds. All fields are required; a payload missing any of
/// them fails to decode instead of producing partially-populated claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}
