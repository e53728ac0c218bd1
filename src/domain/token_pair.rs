use serde::{Deserialize, Serialize};

/// Freshly minted access + refresh tokens, as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
