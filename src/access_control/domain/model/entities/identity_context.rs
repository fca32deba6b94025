use crate::{
    access_control::domain::model::value_objects::{role_name::RoleName, subject_id::SubjectId},
    iam_integration::interfaces::acl::identity_provider_facade::{SessionClaims, TokenClaims},
};

// Lives in the request extensions of exactly one request or upgrade; never
// cached or shared across requests.
#[derive(Clone, Debug)]
pub struct IdentityContext {
    pub subject_id: SubjectId,
    pub role: RoleName,
}

// Inserted only on the query-parameter path: a WebSocket connection outlives
// the upgrade request and needs the raw claims for its whole lifetime.
#[derive(Clone, Debug)]
pub struct VerifiedSession {
    pub claims: TokenClaims,
    pub session_claims: SessionClaims,
}
