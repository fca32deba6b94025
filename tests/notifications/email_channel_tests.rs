use education_platform_api::notifications::domain::{
    model::enums::notification_domain_error::NotificationDomainError,
    services::notification_dispatch_service::NotificationDispatchService,
};

use crate::support::{STATIC_SUBJECT, create_email_channel_harness, email_notification};

#[tokio::test]
async fn all_recipients_travel_in_one_transport_call() {
    let harness = create_email_channel_harness();
    let notification = email_notification(&[
        "ana@ejemplo.edu",
        "luis@ejemplo.edu",
        "marta@ejemplo.edu",
    ]);

    harness
        .channel
        .send_notification(&notification)
        .await
        .expect("send succeeds");

    let calls = harness.email_transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].to_addresses,
        vec![
            "ana@ejemplo.edu".to_string(),
            "luis@ejemplo.edu".to_string(),
            "marta@ejemplo.edu".to_string(),
        ]
    );
}

#[tokio::test]
async fn envelope_carries_joined_recipients_static_subject_and_body() {
    let harness = create_email_channel_harness();
    let notification = email_notification(&["ana@ejemplo.edu", "luis@ejemplo.edu"]);

    harness
        .channel
        .send_notification(&notification)
        .await
        .expect("send succeeds");

    let calls = harness.email_transport.calls();
    let raw_message =
        String::from_utf8(calls[0].raw_message.clone()).expect("raw message is utf-8");

    assert!(raw_message.contains("To: ana@ejemplo.edu, luis@ejemplo.edu\r\n"));
    assert!(raw_message.contains(&format!("Subject: {STATIC_SUBJECT}\r\n")));
    assert!(raw_message.ends_with("Hay novedades en tu curso."));
}

#[tokio::test]
async fn empty_address_set_is_a_noop_without_transport_call() {
    let harness = create_email_channel_harness();
    let notification = email_notification(&[]);

    harness
        .channel
        .send_notification(&notification)
        .await
        .expect("empty send is a no-op");

    assert!(harness.email_transport.calls().is_empty());
}

#[tokio::test]
async fn transport_failure_fails_the_whole_send() {
    let harness = create_email_channel_harness();
    harness.email_transport.set_should_fail(true);
    let notification = email_notification(&["ana@ejemplo.edu", "luis@ejemplo.edu"]);

    let result = harness.channel.send_notification(&notification).await;

    assert!(matches!(
        result,
        Err(NotificationDomainError::DeliveryFailed(_))
    ));
    assert_eq!(harness.email_transport.calls().len(), 1);
}
