use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Datelike, Days, Utc, Weekday};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::reporting::domain::{
    model::enums::reporting_domain_error::ReportingDomainError,
    services::weekly_report_service::WeeklyReportService,
};

pub struct WeeklyReportScheduler {
    handle: JoinHandle<()>,
}

impl WeeklyReportScheduler {
    pub fn spawn(
        service: Arc<dyn WeeklyReportService>,
        weekday: Weekday,
        hour_utc: u32,
    ) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                let now = Utc::now();
                let fire_at = next_run_at(now, weekday, hour_utc);
                let wait = (fire_at - now).to_std().unwrap_or(Duration::ZERO);

                tracing::info!(fire_at = %fire_at, "weekly report run scheduled");
                tokio::time::sleep(wait).await;

                let run_id = Uuid::new_v4();
                let report_date = Utc::now().date_naive();

                match service.run_weekly_report(report_date).await {
                    Ok(summary) => tracing::info!(
                        %run_id,
                        delivered = summary.delivered,
                        failed = summary.failed,
                        skipped = summary.skipped,
                        "scheduled weekly report run finished"
                    ),
                    Err(ReportingDomainError::RunAlreadyInProgress) => tracing::warn!(
                        %run_id,
                        "scheduled weekly report run skipped: previous run still in progress"
                    ),
                    Err(error) => tracing::error!(
                        %run_id,
                        %error,
                        "scheduled weekly report run aborted"
                    ),
                }
            }
        });

        Self { handle }
    }

    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for WeeklyReportScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn next_run_at(after: DateTime<Utc>, weekday: Weekday, hour_utc: u32) -> DateTime<Utc> {
    for day_offset in 0..=7 {
        let candidate_date = match after.date_naive().checked_add_days(Days::new(day_offset)) {
            Some(date) => date,
            None => continue,
        };

        if candidate_date.weekday() != weekday {
            continue;
        }

        let candidate = match candidate_date.and_hms_opt(hour_utc, 0, 0) {
            Some(naive) => naive.and_utc(),
            None => continue,
        };

        if candidate > after {
            return candidate;
        }
    }

    after + chrono::Duration::days(7)
}
