use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::{
    notifications::domain::{
        model::entities::notification_data::NotificationData,
        services::notification_dispatch_service::NotificationDispatchService,
    },
    reporting::{
        domain::{
            model::{
                enums::reporting_domain_error::ReportingDomainError,
                value_objects::report_access_token::ReportAccessToken,
            },
            services::weekly_report_service::{WeeklyReportRunSummary, WeeklyReportService},
        },
        infrastructure::persistence::repositories::report_recipient_repository::ReportRecipientRepository,
    },
};

pub struct WeeklyReportServiceImpl {
    recipient_repository: Arc<dyn ReportRecipientRepository>,
    email_dispatcher: Arc<dyn NotificationDispatchService>,
    report_base_url: String,
    report_token_secret: String,
    run_guard: Mutex<()>,
}

impl WeeklyReportServiceImpl {
    pub fn new(
        recipient_repository: Arc<dyn ReportRecipientRepository>,
        email_dispatcher: Arc<dyn NotificationDispatchService>,
        report_base_url: String,
        report_token_secret: String,
    ) -> Self {
        Self {
            recipient_repository,
            email_dispatcher,
            report_base_url,
            report_token_secret,
            run_guard: Mutex::new(()),
        }
    }

    pub fn report_access_url(&self, subject_id: &str, report_date: NaiveDate) -> String {
        let token = ReportAccessToken::derive(subject_id, report_date, &self.report_token_secret);

        format!(
            "{}/report/weekly/{}/{}?token={}",
            self.report_base_url,
            subject_id,
            report_date.format("%Y-%m-%d"),
            token.value()
        )
    }

    fn report_email_body(&self, display_name: &str, access_url: &str) -> String {
        format!(
            "Hola {display_name},\n\nTu reporte semanal de actividad ya está disponible:\n{access_url}\n\nEl enlace es válido únicamente para la semana indicada.\n"
        )
    }
}

#[async_trait]
impl WeeklyReportService for WeeklyReportServiceImpl {
    async fn run_weekly_report(
        &self,
        report_date: NaiveDate,
    ) -> Result<WeeklyReportRunSummary, ReportingDomainError> {
        // Single-flight: a run that finds the guard taken fails fast instead
        // of stacking behind the one in progress.
        let _run_guard = self
            .run_guard
            .try_lock()
            .map_err(|_| ReportingDomainError::RunAlreadyInProgress)?;

        let recipients = self.recipient_repository.list_report_recipients().await?;

        let mut summary = WeeklyReportRunSummary::default();

        for recipient in recipients {
            if recipient.subject_id.trim().is_empty() || recipient.email.trim().is_empty() {
                tracing::warn!(
                    subject_id = %recipient.subject_id,
                    "weekly report recipient skipped: missing subject id or email"
                );
                summary.skipped += 1;
                continue;
            }

            let access_url = self.report_access_url(&recipient.subject_id, report_date);

            let notification = NotificationData {
                addresses: vec![recipient.email.clone()],
                title: "Reporte semanal de actividad".to_string(),
                body: self.report_email_body(&recipient.display_name, &access_url),
            };

            match self.email_dispatcher.send_notification(&notification).await {
                Ok(()) => summary.delivered += 1,
                Err(error) => {
                    tracing::warn!(
                        subject_id = %recipient.subject_id,
                        %error,
                        "weekly report delivery failed"
                    );
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            report_date = %report_date,
            delivered = summary.delivered,
            failed = summary.failed,
            skipped = summary.skipped,
            "weekly report run completed"
        );

        Ok(summary)
    }
}
