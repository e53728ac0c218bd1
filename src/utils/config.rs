use std::env;

use dotenvy::dotenv;
use thiserror::Error;

/// Process-wide configuration, loaded once from the environment and treated
/// as immutable afterwards.
#[derive(Clone)]
pub struct Config {
    http_addr: String,
    db_url: String,
    access_token_secret: String,
    refresh_token_secret: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    ollama_base_url: String,
    ollama_model: String,
}

impl Config {
    pub fn http_addr(&self) -> &str {
        &self.http_addr
    }
    pub fn db_url(&self) -> &str {
        &self.db_url
    }
    pub fn access_token_secret(&self) -> &str {
        &self.access_token_secret
    }
    pub fn refresh_token_secret(&self) -> &str {
        &self.refresh_token_secret
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn ollama_base_url(&self) -> &str {
        &self.ollama_base_url
    }
    pub fn ollama_model(&self) -> &str {
        &self.ollama_model
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let db_url = req_var("DATABASE_URL")?;
        let access_token_secret = req_var("ACCESS_TOKEN_SECRET")?;
        let refresh_token_secret = req_var("REFRESH_TOKEN_SECRET")?;

        if access_token_secret.is_empty() || refresh_token_secret.is_empty() {
            return Err(ConfigError::Invalid("token secrets must not be empty"));
        }
        // Access and refresh keys are separate on purpose; reusing one value
        // for both collapses the kind separation.
        if access_token_secret == refresh_token_secret {
            return Err(ConfigError::Invalid(
                "ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET must differ",
            ));
        }

        let access_ttl_seconds = parse_i64_or("ACCESS_TTL_SECONDS", 900)?;
        let refresh_ttl_seconds = parse_i64_or("REFRESH_TTL_SECONDS", 2_592_000)?;

        let http_addr = opt_var("HTTP_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into());
        let ollama_base_url =
            opt_var("OLLAMA_BASE_URL").unwrap_or_else(|| "http://127.0.0.1:11434".into());
        let ollama_model = opt_var("OLLAMA_MODEL").unwrap_or_else(|| "llama3".into());

        Ok(Self {
            http_addr,
            db_url,
            access_token_secret,
            refresh_token_secret,
            access_ttl_seconds,
            refresh_ttl_seconds,
            ollama_base_url,
            ollama_model,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => v.parse::<i64>().map_err(|_| ConfigError::Invalid(key)),
    }
}
