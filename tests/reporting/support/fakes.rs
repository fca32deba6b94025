use std::{
    collections::HashSet,
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use education_platform_api::{
    notifications::domain::{
        model::{
            entities::notification_data::NotificationData,
            enums::notification_domain_error::NotificationDomainError,
        },
        services::notification_dispatch_service::NotificationDispatchService,
    },
    reporting::{
        domain::model::enums::reporting_domain_error::ReportingDomainError,
        infrastructure::persistence::repositories::report_recipient_repository::{
            ReportRecipientRecord, ReportRecipientRepository,
        },
    },
};

#[derive(Default)]
struct FakeReportRecipientRepositoryState {
    recipients: Vec<ReportRecipientRecord>,
    should_fail: bool,
    calls: usize,
}

pub struct FakeReportRecipientRepository {
    state: Mutex<FakeReportRecipientRepositoryState>,
}

impl FakeReportRecipientRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeReportRecipientRepositoryState::default()),
        }
    }

    pub fn set_recipients(&self, recipients: Vec<ReportRecipientRecord>) {
        self.state.lock().expect("mutex poisoned").recipients = recipients;
    }

    pub fn set_should_fail(&self, value: bool) {
        self.state.lock().expect("mutex poisoned").should_fail = value;
    }

    pub fn calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").calls
    }
}

#[async_trait]
impl ReportRecipientRepository for FakeReportRecipientRepository {
    async fn list_report_recipients(
        &self,
    ) -> Result<Vec<ReportRecipientRecord>, ReportingDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.calls += 1;

        if state.should_fail {
            return Err(ReportingDomainError::RecipientFetchFailed(
                "connection refused".to_string(),
            ));
        }

        Ok(state.recipients.clone())
    }
}

#[derive(Default)]
struct FakeNotificationDispatcherState {
    notifications: Vec<NotificationData>,
    fail_addresses: HashSet<String>,
    delay: Option<Duration>,
}

pub struct FakeNotificationDispatcher {
    state: Mutex<FakeNotificationDispatcherState>,
}

impl FakeNotificationDispatcher {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeNotificationDispatcherState::default()),
        }
    }

    pub fn fail_for_address(&self, address: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .fail_addresses
            .insert(address.to_string());
    }

    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().expect("mutex poisoned").delay = Some(delay);
    }

    pub fn notifications(&self) -> Vec<NotificationData> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .notifications
            .clone()
    }
}

#[async_trait]
impl NotificationDispatchService for FakeNotificationDispatcher {
    async fn send_notification(
        &self,
        notification: &NotificationData,
    ) -> Result<(), NotificationDomainError> {
        let delay = self.state.lock().expect("mutex poisoned").delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().expect("mutex poisoned");
        state.notifications.push(notification.clone());

        let failing = notification
            .addresses
            .iter()
            .any(|address| state.fail_addresses.contains(address));

        if failing {
            return Err(NotificationDomainError::DeliveryFailed(
                "mailbox unavailable".to_string(),
            ));
        }

        Ok(())
    }
}
