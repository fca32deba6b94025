use async_trait::async_trait;

use crate::{
    access_control::domain::model::enums::{
        access_control_domain_error::AccessControlDomainError, role_claim_lookup::RoleClaimLookup,
    },
    iam_integration::interfaces::acl::identity_provider_facade::{SessionClaims, TokenClaims},
};

pub const ROLE_CLAIM_KEY: &str = "role";

// Decode and verify are independent checks against two authorities; the gate
// must call both before a request counts as authorized.
#[async_trait]
pub trait TokenValidationService: Send + Sync {
    async fn decode(&self, access_token: &str) -> Result<TokenClaims, AccessControlDomainError>;

    async fn verify(
        &self,
        access_token: &str,
    ) -> Result<SessionClaims, AccessControlDomainError>;

    fn extract_role(&self, claims: &TokenClaims) -> RoleClaimLookup;
}
