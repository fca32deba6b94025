use async_trait::async_trait;
use chrono::NaiveDate;

use crate::reporting::domain::model::enums::reporting_domain_error::ReportingDomainError;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WeeklyReportRunSummary {
    pub delivered: u32,
    pub failed: u32,
    pub skipped: u32,
}

#[async_trait]
pub trait WeeklyReportService: Send + Sync {
    async fn run_weekly_report(
        &self,
        report_date: NaiveDate,
    ) -> Result<WeeklyReportRunSummary, ReportingDomainError>;
}
