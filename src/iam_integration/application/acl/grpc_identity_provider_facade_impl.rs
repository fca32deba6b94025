use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tokio::sync::{Mutex, RwLock};
use tonic::transport::{Channel, Endpoint};

use crate::{
    iam_integration::interfaces::acl::identity_provider_facade::{
        IdentityProviderError, IdentityProviderFacade, SessionClaims, TokenClaims,
    },
    identity_grpc::{
        DecodeAccessTokenRequest, DecodeAccessTokenResponse, VerifySessionRequest,
        VerifySessionResponse,
        identity_verification_service_client::IdentityVerificationServiceClient,
    },
};

#[derive(Clone)]
struct CachedDecode {
    claims: TokenClaims,
    expires_at: Instant,
}

#[derive(Default)]
struct CircuitState {
    consecutive_failures: u32,
    opened_until: Option<Instant>,
}

pub struct GrpcIdentityProviderFacadeImpl {
    endpoint: String,
    timeout: Duration,
    decode_cache_ttl: Duration,
    failure_threshold: u32,
    open_duration: Duration,
    decode_cache: Arc<RwLock<HashMap<String, CachedDecode>>>,
    circuit: Arc<Mutex<CircuitState>>,
}

impl GrpcIdentityProviderFacadeImpl {
    pub fn new(
        endpoint: String,
        timeout: Duration,
        decode_cache_ttl: Duration,
        failure_threshold: u32,
        open_duration: Duration,
    ) -> Self {
        Self {
            endpoint,
            timeout,
            decode_cache_ttl,
            failure_threshold,
            open_duration,
            decode_cache: Arc::new(RwLock::new(HashMap::new())),
            circuit: Arc::new(Mutex::new(CircuitState::default())),
        }
    }

    fn token_hash(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    async fn get_cached_decode(&self, token_hash: &str) -> Option<TokenClaims> {
        let guard = self.decode_cache.read().await;
        guard.get(token_hash).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.claims.clone())
            } else {
                None
            }
        })
    }

    async fn cache_decode(&self, token_hash: String, claims: TokenClaims) {
        let mut guard = self.decode_cache.write().await;
        guard.insert(
            token_hash,
            CachedDecode {
                claims,
                expires_at: Instant::now() + self.decode_cache_ttl,
            },
        );
    }

    async fn can_attempt_call(&self) -> bool {
        let mut guard = self.circuit.lock().await;
        match guard.opened_until {
            Some(until) if until > Instant::now() => false,
            Some(_) => {
                guard.opened_until = None;
                true
            }
            None => true,
        }
    }

    async fn register_success(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = 0;
        guard.opened_until = None;
    }

    async fn register_failure(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = guard.consecutive_failures.saturating_add(1);

        if guard.consecutive_failures >= self.failure_threshold {
            guard.opened_until = Some(Instant::now() + self.open_duration);
            guard.consecutive_failures = 0;
        }
    }

    async fn grpc_client(
        &self,
    ) -> Result<IdentityVerificationServiceClient<Channel>, IdentityProviderError> {
        let endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?
            .connect_timeout(self.timeout)
            .timeout(self.timeout);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?;

        Ok(IdentityVerificationServiceClient::new(channel))
    }

    fn parse_extra_claims(raw: &str) -> Result<Option<Map<String, Value>>, IdentityProviderError> {
        if raw.is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Map<String, Value>>(raw)
            .map(Some)
            .map_err(|e| {
                IdentityProviderError::InvalidToken(format!("claims payload is not an object: {e}"))
            })
    }

    fn parse_instant(epoch_seconds: i64) -> Result<DateTime<Utc>, IdentityProviderError> {
        DateTime::from_timestamp(epoch_seconds, 0).ok_or_else(|| {
            IdentityProviderError::InvalidToken("claims carry an invalid timestamp".to_string())
        })
    }

    fn token_claims_from_response(
        response: DecodeAccessTokenResponse,
    ) -> Result<TokenClaims, IdentityProviderError> {
        if !response.is_valid {
            return Err(IdentityProviderError::InvalidToken(response.error_message));
        }

        Ok(TokenClaims {
            subject_id: response.subject_id,
            extra_claims: Self::parse_extra_claims(&response.extra_claims_json)?,
            issued_at: Self::parse_instant(response.issued_at_epoch_seconds)?,
            expires_at: Self::parse_instant(response.expires_at_epoch_seconds)?,
        })
    }

    fn session_claims_from_response(
        response: VerifySessionResponse,
    ) -> Result<SessionClaims, IdentityProviderError> {
        if !response.is_active {
            return Err(IdentityProviderError::SessionInvalid(
                response.error_message,
            ));
        }

        Ok(SessionClaims {
            subject_id: response.subject_id,
            session_id: response.session_id,
            issued_at: Self::parse_instant(response.issued_at_epoch_seconds)?,
            expires_at: Self::parse_instant(response.expires_at_epoch_seconds)?,
        })
    }
}

#[async_trait]
impl IdentityProviderFacade for GrpcIdentityProviderFacadeImpl {
    async fn decode_token(&self, access_token: &str) -> Result<TokenClaims, IdentityProviderError> {
        if access_token.trim().is_empty() {
            return Err(IdentityProviderError::InvalidToken(
                "access token is empty".to_string(),
            ));
        }

        if !self.can_attempt_call().await {
            return Err(IdentityProviderError::Unavailable(
                "circuit breaker is open".to_string(),
            ));
        }

        let token_hash = Self::token_hash(access_token);

        if let Some(cached) = self.get_cached_decode(&token_hash).await {
            return Ok(cached);
        }

        let mut client = self.grpc_client().await?;

        let response = client
            .decode_access_token(DecodeAccessTokenRequest {
                access_token: access_token.to_string(),
            })
            .await;

        let response = match response {
            Ok(value) => {
                self.register_success().await;
                value.into_inner()
            }
            Err(error) => {
                self.register_failure().await;
                return Err(IdentityProviderError::Unavailable(error.to_string()));
            }
        };

        let claims = Self::token_claims_from_response(response)?;

        self.cache_decode(token_hash, claims.clone()).await;

        Ok(claims)
    }

    // Session liveness is never cached: revocation must be observed on the
    // next request, so every call goes to the provider.
    async fn verify_session(
        &self,
        access_token: &str,
    ) -> Result<SessionClaims, IdentityProviderError> {
        if access_token.trim().is_empty() {
            return Err(IdentityProviderError::SessionInvalid(
                "access token is empty".to_string(),
            ));
        }

        if !self.can_attempt_call().await {
            return Err(IdentityProviderError::Unavailable(
                "circuit breaker is open".to_string(),
            ));
        }

        let mut client = self.grpc_client().await?;

        let response = client
            .verify_session(VerifySessionRequest {
                access_token: access_token.to_string(),
            })
            .await;

        let response = match response {
            Ok(value) => {
                self.register_success().await;
                value.into_inner()
            }
            Err(error) => {
                self.register_failure().await;
                return Err(IdentityProviderError::Unavailable(error.to_string()));
            }
        };

        Self::session_claims_from_response(response)
    }
}
