use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("authorization token is missing")]
    MissingAuthToken,

    #[error("authorization token is invalid")]
    InvalidAuthToken,

    #[error("role could not be extracted from token claims")]
    RoleExtractionFailed,

    #[error("role is not allowed to perform this request")]
    AuthorizationFailed,

    #[error("subject id is invalid")]
    InvalidSubjectId,

    #[error("role name is invalid")]
    InvalidRoleName,

    #[error("identity provider unavailable: {0}")]
    IdentityProviderUnavailable(String),
}
