//! Token issuance, validation and rotation.
//!
//! This module provides the `TokenService`, the sole authority for creating
//! and checking JWT access/refresh token pairs:
//! - `issue_pair` mints a fresh access + refresh pair for a user id
//! - `validate_access` checks an access token and returns the embedded user id
//! - `rotate` exchanges a valid refresh token for a brand-new pair
//!
//! Security model:
//! 1. Access and refresh tokens are signed with independent secrets, so a
//!    token of one kind never verifies against the other kind's key.
//! 2. The token kind is also embedded in the claims and checked on every
//!    parse; even with identical secrets a kind mismatch is rejected.
//! 3. Validity is fully self-contained (signature + expiry + kind). There is
//!    no server-side session record and no revocation list; a stolen refresh
//!    token stays usable until its natural expiry.
//!
//! Errors:
//! - All parse failures (malformed, bad signature, expired, wrong kind)
//!   collapse into `TokenServiceError::InvalidToken`, so callers cannot tell
//!   a forged token from an expired one.
//! - Failures while signing fresh tokens surface as `Internal`; they are
//!   unexpected and not caused by caller input.
//!
//! Concurrency:
//! - The service is immutable after construction and performs no I/O, so a
//!   single instance is shared across request handlers without locking.

use chrono::{Duration, Utc};
use thiserror::Error;

use crate::domain::{Claims, TokenKind, TokenPair};
use crate::utils::auth::{decode_claims, encode_claims};
use crate::utils::Config;

pub struct TokenService {
    access_secret: Vec<u8>,
    refresh_secret: Vec<u8>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

#[derive(Error, Debug)]
pub enum TokenServiceError {
    #[error("invalid token")]
    InvalidToken,

    #[error("token signing failed: {0}")]
    Internal(#[from] jsonwebtoken::errors::Error),
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self::from_parts(
            config.access_token_secret(),
            config.refresh_token_secret(),
            config.access_ttl_seconds(),
            config.refresh_ttl_seconds(),
        )
    }

    /// Build a service from explicit secrets and TTLs.
    ///
    /// Secrets for the two kinds must be managed as independent values;
    /// nothing here derives one from the other.
    pub fn from_parts(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl_seconds: i64,
        refresh_ttl_seconds: i64,
    ) -> Self {
        Self {
            access_secret: access_secret.as_bytes().to_vec(),
            refresh_secret: refresh_secret.as_bytes().to_vec(),
            access_ttl: Duration::seconds(access_ttl_seconds),
            refresh_ttl: Duration::seconds(refresh_ttl_seconds),
        }
    }

    /// Mint a fresh access + refresh pair for `user_id`.
    pub fn issue_pair(&self, user_id: i32) -> Result<TokenPair, TokenServiceError> {
        let access =
            self.new_token(user_id, TokenKind::Access, self.access_ttl, &self.access_secret)?;
        let refresh =
            self.new_token(user_id, TokenKind::Refresh, self.refresh_ttl, &self.refresh_secret)?;

        Ok(TokenPair {
            access_token: access,
            refresh_token: refresh,
        })
    }

    /// Validate an access token and return the embedded user id.
    ///
    /// Fails with `InvalidToken` if the token is malformed, carries a bad
    /// signature, has expired, or is not an access token.
    pub fn validate_access(&self, token: &str) -> Result<i32, TokenServiceError> {
        let claims = self.parse(token, &self.access_secret, TokenKind::Access)?;
        Ok(claims.user_id)
    }

    /// Exchange a valid refresh token for a brand-new pair.
    ///
    /// The returned pair always contains a fresh refresh token as well; the
    /// presented one remains decodable until its own expiry (stateless
    /// design, no revocation list).
    pub fn rotate(&self, refresh_token: &str) -> Result<TokenPair, TokenServiceError> {
        let claims = self.parse(refresh_token, &self.refresh_secret, TokenKind::Refresh)?;
        self.issue_pair(claims.user_id)
    }

    fn new_token(
        &self,
        user_id: i32,
        kind: TokenKind,
        ttl: Duration,
        secret: &[u8],
    ) -> Result<String, TokenServiceError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(encode_claims(&claims, secret)?)
    }

    // Every failure mode maps to the same opaque error on purpose.
    fn parse(
        &self,
        token: &str,
        secret: &[u8],
        expected: TokenKind,
    ) -> Result<Claims, TokenServiceError> {
        let claims = decode_claims(token, secret).map_err(|_| TokenServiceError::InvalidToken)?;
        if claims.kind != expected {
            return Err(TokenServiceError::InvalidToken);
        }
        Ok(claims)
    }
}
