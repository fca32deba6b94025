use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

#[derive(Clone, Debug)]
pub struct TokenClaims {
    pub subject_id: String,
    pub extra_claims: Option<Map<String, Value>>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct SessionClaims {
    pub subject_id: String,
    pub session_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityProviderError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("session invalid: {0}")]
    SessionInvalid(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IdentityProviderFacade: Send + Sync {
    async fn decode_token(&self, access_token: &str) -> Result<TokenClaims, IdentityProviderError>;

    async fn verify_session(
        &self,
        access_token: &str,
    ) -> Result<SessionClaims, IdentityProviderError>;
}
