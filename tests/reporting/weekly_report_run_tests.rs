use std::time::Duration;

use axum::{extract::State, http::StatusCode};
use education_platform_api::reporting::{
    domain::{
        model::{
            enums::reporting_domain_error::ReportingDomainError,
            value_objects::report_access_token::ReportAccessToken,
        },
        services::weekly_report_service::{WeeklyReportRunSummary, WeeklyReportService},
    },
    interfaces::rest::controllers::reporting_rest_controller::{
        ReportingRestControllerState, run_weekly_report,
    },
};

use crate::support::{
    REPORT_TOKEN_SECRET, create_reporting_harness, recipient, recipient_without_email, report_date,
};

#[tokio::test]
async fn run_processes_every_recipient_and_tallies_accurately() {
    let harness = create_reporting_harness();
    harness.recipient_repository.set_recipients(vec![
        recipient("rep-0001", "ana@ejemplo.edu", "Ana"),
        recipient_without_email("rep-0002"),
        recipient("rep-0003", "luis@ejemplo.edu", "Luis"),
    ]);
    harness.email_dispatcher.fail_for_address("luis@ejemplo.edu");

    let summary = harness
        .service
        .run_weekly_report(report_date())
        .await
        .expect("run completes");

    assert_eq!(
        summary,
        WeeklyReportRunSummary {
            delivered: 1,
            failed: 1,
            skipped: 1,
        }
    );

    // Recipient without email is never handed to the dispatcher.
    let sent = harness.email_dispatcher.notifications();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].addresses, vec!["ana@ejemplo.edu".to_string()]);
    assert_eq!(sent[1].addresses, vec!["luis@ejemplo.edu".to_string()]);
}

#[tokio::test]
async fn report_email_carries_the_access_url_with_derived_token() {
    let harness = create_reporting_harness();
    harness
        .recipient_repository
        .set_recipients(vec![recipient("rep-0001", "ana@ejemplo.edu", "Ana")]);

    harness
        .service
        .run_weekly_report(report_date())
        .await
        .expect("run completes");

    let token = ReportAccessToken::derive("rep-0001", report_date(), REPORT_TOKEN_SECRET);
    let expected_url = format!(
        "https://plataforma.edu/report/weekly/rep-0001/2025-03-10?token={}",
        token.value()
    );

    let sent = harness.email_dispatcher.notifications();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains(&expected_url));
    assert!(sent[0].body.contains("Ana"));
}

#[tokio::test]
async fn access_url_shape_matches_the_report_endpoint_contract() {
    let harness = create_reporting_harness();

    let access_url = harness.service.report_access_url("rep-0001", report_date());

    let token = ReportAccessToken::derive("rep-0001", report_date(), REPORT_TOKEN_SECRET);
    assert_eq!(
        access_url,
        format!(
            "https://plataforma.edu/report/weekly/rep-0001/2025-03-10?token={}",
            token.value()
        )
    );
}

#[tokio::test]
async fn blank_subject_id_is_skipped_and_not_counted_as_failure() {
    let harness = create_reporting_harness();
    harness.recipient_repository.set_recipients(vec![
        recipient("   ", "fantasma@ejemplo.edu", "Fantasma"),
        recipient("rep-0001", "ana@ejemplo.edu", "Ana"),
    ]);

    let summary = harness
        .service
        .run_weekly_report(report_date())
        .await
        .expect("run completes");

    assert_eq!(
        summary,
        WeeklyReportRunSummary {
            delivered: 1,
            failed: 0,
            skipped: 1,
        }
    );
}

#[tokio::test]
async fn recipient_fetch_failure_aborts_the_run_without_dispatch() {
    let harness = create_reporting_harness();
    harness.recipient_repository.set_should_fail(true);

    let result = harness.service.run_weekly_report(report_date()).await;

    assert!(matches!(
        result,
        Err(ReportingDomainError::RecipientFetchFailed(_))
    ));
    assert!(harness.email_dispatcher.notifications().is_empty());
}

#[tokio::test]
async fn concurrent_run_is_rejected_while_one_is_in_progress() {
    let harness = create_reporting_harness();
    harness
        .recipient_repository
        .set_recipients(vec![recipient("rep-0001", "ana@ejemplo.edu", "Ana")]);
    harness.email_dispatcher.set_delay(Duration::from_millis(200));

    let service = harness.service.clone();
    let first_run = tokio::spawn(async move { service.run_weekly_report(report_date()).await });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let second_run = harness.service.run_weekly_report(report_date()).await;
    assert!(matches!(
        second_run,
        Err(ReportingDomainError::RunAlreadyInProgress)
    ));

    let first_summary = first_run
        .await
        .expect("task joins")
        .expect("first run completes");
    assert_eq!(first_summary.delivered, 1);
}

#[tokio::test]
async fn manual_run_endpoint_returns_the_tally() {
    let harness = create_reporting_harness();
    harness.recipient_repository.set_recipients(vec![
        recipient("rep-0001", "ana@ejemplo.edu", "Ana"),
        recipient_without_email("rep-0002"),
    ]);

    let state = ReportingRestControllerState {
        weekly_report_service: harness.service.clone(),
    };

    let response = run_weekly_report(State(state))
        .await
        .expect("manual run succeeds");

    assert_eq!(response.0.delivered, 1);
    assert_eq!(response.0.failed, 0);
    assert_eq!(response.0.skipped, 1);
}

#[tokio::test]
async fn manual_run_endpoint_reports_conflict_while_run_in_progress() {
    let harness = create_reporting_harness();
    harness
        .recipient_repository
        .set_recipients(vec![recipient("rep-0001", "ana@ejemplo.edu", "Ana")]);
    harness.email_dispatcher.set_delay(Duration::from_millis(200));

    let service = harness.service.clone();
    let first_run = tokio::spawn(async move { service.run_weekly_report(report_date()).await });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let state = ReportingRestControllerState {
        weekly_report_service: harness.service.clone(),
    };
    let response = run_weekly_report(State(state)).await;

    assert!(matches!(response, Err((StatusCode::CONFLICT, _))));

    first_run
        .await
        .expect("task joins")
        .expect("first run completes");
}
