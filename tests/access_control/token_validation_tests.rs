use chrono::{Duration, Utc};
use education_platform_api::{
    access_control::domain::{
        model::enums::{
            access_control_domain_error::AccessControlDomainError,
            role_claim_lookup::RoleClaimLookup,
        },
        services::token_validation_service::TokenValidationService,
    },
    iam_integration::interfaces::acl::identity_provider_facade::TokenClaims,
};
use serde_json::{Map, Value, json};

use crate::support::{SUBJECT_1_ID, create_access_control_harness, fixtures::TOKEN_1};

fn claims_with_extra(extra_claims: Option<Map<String, Value>>) -> TokenClaims {
    TokenClaims {
        subject_id: SUBJECT_1_ID.to_string(),
        extra_claims,
        issued_at: Utc::now() - Duration::minutes(5),
        expires_at: Utc::now() + Duration::minutes(10),
    }
}

fn extra_with_role(role: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("role".to_string(), role);
    map
}

#[tokio::test]
async fn decode_failure_maps_to_invalid_auth_token() {
    let harness = create_access_control_harness();
    harness.identity_provider.set_decode_should_fail(true);

    let result = harness.token_validation_service.decode(TOKEN_1).await;

    assert!(matches!(
        result,
        Err(AccessControlDomainError::InvalidAuthToken)
    ));
}

#[tokio::test]
async fn verify_failure_maps_to_invalid_auth_token() {
    let harness = create_access_control_harness();
    harness.identity_provider.set_verify_should_fail(true);

    let result = harness.token_validation_service.verify(TOKEN_1).await;

    assert!(matches!(
        result,
        Err(AccessControlDomainError::InvalidAuthToken)
    ));
}

#[tokio::test]
async fn provider_outage_maps_to_identity_provider_unavailable() {
    let harness = create_access_control_harness();
    harness.identity_provider.set_decode_unavailable(true);

    let result = harness.token_validation_service.decode(TOKEN_1).await;

    assert!(matches!(
        result,
        Err(AccessControlDomainError::IdentityProviderUnavailable(_))
    ));
}

#[tokio::test]
async fn decode_and_verify_are_independent_calls() {
    let harness = create_access_control_harness();

    harness
        .token_validation_service
        .decode(TOKEN_1)
        .await
        .expect("decode succeeds");
    harness
        .token_validation_service
        .verify(TOKEN_1)
        .await
        .expect("verify succeeds");

    assert_eq!(harness.identity_provider.decode_calls(), 1);
    assert_eq!(harness.identity_provider.verify_calls(), 1);
}

#[tokio::test]
async fn extract_role_finds_string_role() {
    let harness = create_access_control_harness();
    let claims = claims_with_extra(Some(extra_with_role(json!("student"))));

    let lookup = harness.token_validation_service.extract_role(&claims);

    match lookup {
        RoleClaimLookup::Found(role) => assert_eq!(role.value(), "student"),
        other => panic!("expected role to be found, got {other:?}"),
    }
}

#[tokio::test]
async fn extract_role_reports_missing_container() {
    let harness = create_access_control_harness();
    let claims = claims_with_extra(None);

    let lookup = harness.token_validation_service.extract_role(&claims);

    assert_eq!(lookup, RoleClaimLookup::MissingContainer);
}

#[tokio::test]
async fn extract_role_reports_missing_field() {
    let harness = create_access_control_harness();
    let claims = claims_with_extra(Some(Map::new()));

    let lookup = harness.token_validation_service.extract_role(&claims);

    assert_eq!(lookup, RoleClaimLookup::MissingField);
}

#[tokio::test]
async fn extract_role_reports_wrong_type_for_non_string_values() {
    let harness = create_access_control_harness();

    for value in [json!(7), json!(["teacher"]), json!({"name": "teacher"})] {
        let claims = claims_with_extra(Some(extra_with_role(value)));
        let lookup = harness.token_validation_service.extract_role(&claims);
        assert_eq!(lookup, RoleClaimLookup::WrongType);
    }
}

#[tokio::test]
async fn extract_role_reports_wrong_type_for_blank_role() {
    let harness = create_access_control_harness();
    let claims = claims_with_extra(Some(extra_with_role(json!("   "))));

    let lookup = harness.token_validation_service.extract_role(&claims);

    assert_eq!(lookup, RoleClaimLookup::WrongType);
}
