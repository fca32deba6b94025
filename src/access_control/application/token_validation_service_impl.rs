use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::domain::{
        model::{
            enums::{
                access_control_domain_error::AccessControlDomainError,
                role_claim_lookup::RoleClaimLookup,
            },
            value_objects::role_name::RoleName,
        },
        services::token_validation_service::{ROLE_CLAIM_KEY, TokenValidationService},
    },
    iam_integration::interfaces::acl::identity_provider_facade::{
        IdentityProviderError, IdentityProviderFacade, SessionClaims, TokenClaims,
    },
};

pub struct TokenValidationServiceImpl {
    identity_provider: Arc<dyn IdentityProviderFacade>,
}

impl TokenValidationServiceImpl {
    pub fn new(identity_provider: Arc<dyn IdentityProviderFacade>) -> Self {
        Self { identity_provider }
    }

    fn map_provider_error(error: IdentityProviderError) -> AccessControlDomainError {
        match error {
            IdentityProviderError::InvalidToken(_) | IdentityProviderError::SessionInvalid(_) => {
                AccessControlDomainError::InvalidAuthToken
            }
            IdentityProviderError::Unavailable(message) => {
                AccessControlDomainError::IdentityProviderUnavailable(message)
            }
        }
    }
}

#[async_trait]
impl TokenValidationService for TokenValidationServiceImpl {
    async fn decode(&self, access_token: &str) -> Result<TokenClaims, AccessControlDomainError> {
        self.identity_provider
            .decode_token(access_token)
            .await
            .map_err(Self::map_provider_error)
    }

    async fn verify(
        &self,
        access_token: &str,
    ) -> Result<SessionClaims, AccessControlDomainError> {
        self.identity_provider
            .verify_session(access_token)
            .await
            .map_err(Self::map_provider_error)
    }

    fn extract_role(&self, claims: &TokenClaims) -> RoleClaimLookup {
        let extra_claims = match claims.extra_claims.as_ref() {
            Some(extra_claims) => extra_claims,
            None => return RoleClaimLookup::MissingContainer,
        };

        let raw_role = match extra_claims.get(ROLE_CLAIM_KEY) {
            Some(raw_role) => raw_role,
            None => return RoleClaimLookup::MissingField,
        };

        let role = match raw_role.as_str() {
            Some(role) => role,
            None => return RoleClaimLookup::WrongType,
        };

        match RoleName::new(role.to_string()) {
            Ok(role_name) => RoleClaimLookup::Found(role_name),
            Err(_) => RoleClaimLookup::WrongType,
        }
    }
}
