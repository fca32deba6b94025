use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, Uri, header},
    middleware::{self, Next},
    response::Response,
};

use crate::access_control::{
    domain::{
        model::{
            entities::identity_context::{IdentityContext, VerifiedSession},
            enums::{
                access_control_domain_error::AccessControlDomainError,
                role_claim_lookup::RoleClaimLookup,
            },
            value_objects::subject_id::SubjectId,
        },
        services::token_validation_service::TokenValidationService,
    },
    interfaces::rest::resources::access_control_error_response_resource::AccessControlErrorResponseResource,
};

pub const TOKEN_QUERY_PARAM: &str = "token";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenSource {
    AuthorizationHeader,
    QueryParam,
}

#[derive(Clone)]
pub struct AccessControlLayerState {
    pub token_validation_service: Arc<dyn TokenValidationService>,
    pub required_roles: Arc<Vec<String>>,
    pub token_source: TokenSource,
}

impl AccessControlLayerState {
    pub fn new(
        token_validation_service: Arc<dyn TokenValidationService>,
        required_roles: &[&str],
        token_source: TokenSource,
    ) -> Self {
        Self {
            token_validation_service,
            required_roles: Arc::new(
                required_roles.iter().map(|role| role.to_string()).collect(),
            ),
            token_source,
        }
    }
}

pub fn bearer_guard(
    router: Router,
    token_validation_service: Arc<dyn TokenValidationService>,
    required_roles: &[&str],
) -> Router {
    apply_guard(
        router,
        AccessControlLayerState::new(
            token_validation_service,
            required_roles,
            TokenSource::AuthorizationHeader,
        ),
    )
}

pub fn websocket_guard(
    router: Router,
    token_validation_service: Arc<dyn TokenValidationService>,
    required_roles: &[&str],
) -> Router {
    apply_guard(
        router,
        AccessControlLayerState::new(
            token_validation_service,
            required_roles,
            TokenSource::QueryParam,
        ),
    )
}

fn apply_guard(router: Router, state: AccessControlLayerState) -> Router {
    router.layer(middleware::from_fn_with_state(
        state,
        access_control_middleware,
    ))
}

pub async fn access_control_middleware(
    State(state): State<AccessControlLayerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<AccessControlErrorResponseResource>)> {
    authorize(&state, &mut request)
        .await
        .map_err(map_domain_error)?;

    Ok(next.run(request).await)
}

// One algorithm for both transports; only token extraction differs. Order is
// fixed: extract -> decode -> verify -> role -> context -> required-role
// check. Every failure is terminal for the request.
pub async fn authorize(
    state: &AccessControlLayerState,
    request: &mut Request,
) -> Result<(), AccessControlDomainError> {
    let token = match state.token_source {
        TokenSource::AuthorizationHeader => bearer_token(request.headers())?,
        TokenSource::QueryParam => query_token(request.uri())?,
    };

    let claims = match state.token_validation_service.decode(&token).await {
        Ok(claims) => claims,
        Err(error) => {
            tracing::warn!(%error, "access token decode failed");
            return Err(error);
        }
    };

    let session_claims = match state.token_validation_service.verify(&token).await {
        Ok(session_claims) => session_claims,
        Err(error) => {
            tracing::warn!(%error, "session verification failed");
            return Err(error);
        }
    };

    let role = match state.token_validation_service.extract_role(&claims) {
        RoleClaimLookup::Found(role) => role,
        lookup => {
            tracing::warn!(?lookup, subject_id = %claims.subject_id, "role extraction failed");
            return Err(AccessControlDomainError::RoleExtractionFailed);
        }
    };

    let subject_id = SubjectId::new(claims.subject_id.clone())?;

    // Inserted before the required-role check: rejection formatting downstream
    // may read these fields.
    request.extensions_mut().insert(IdentityContext {
        subject_id,
        role: role.clone(),
    });

    if state.token_source == TokenSource::QueryParam {
        request.extensions_mut().insert(VerifiedSession {
            claims,
            session_claims,
        });
    }

    if !state.required_roles.is_empty()
        && !state
            .required_roles
            .iter()
            .any(|required| required == role.value())
    {
        return Err(AccessControlDomainError::AuthorizationFailed);
    }

    Ok(())
}

fn bearer_token(headers: &HeaderMap) -> Result<String, AccessControlDomainError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(AccessControlDomainError::MissingAuthToken)?;

    // Clients that omit the scheme send the bare token; it is handed to decode
    // unchanged for compatibility.
    Ok(value.strip_prefix("Bearer ").unwrap_or(value).to_string())
}

fn query_token(uri: &Uri) -> Result<String, AccessControlDomainError> {
    let query = uri.query().unwrap_or_default();

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(AccessControlDomainError::MissingAuthToken)
}

pub fn map_domain_error(
    error: AccessControlDomainError,
) -> (StatusCode, Json<AccessControlErrorResponseResource>) {
    let status = match error {
        AccessControlDomainError::MissingAuthToken
        | AccessControlDomainError::InvalidAuthToken
        | AccessControlDomainError::InvalidSubjectId => StatusCode::UNAUTHORIZED,
        AccessControlDomainError::RoleExtractionFailed
        | AccessControlDomainError::AuthorizationFailed
        | AccessControlDomainError::InvalidRoleName => StatusCode::FORBIDDEN,
        AccessControlDomainError::IdentityProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(AccessControlErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
