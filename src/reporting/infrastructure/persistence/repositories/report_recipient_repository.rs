use async_trait::async_trait;

use crate::reporting::domain::model::enums::reporting_domain_error::ReportingDomainError;

#[derive(Clone, Debug)]
pub struct ReportRecipientRecord {
    pub subject_id: String,
    pub email: String,
    pub display_name: String,
}

#[async_trait]
pub trait ReportRecipientRepository: Send + Sync {
    async fn list_report_recipients(
        &self,
    ) -> Result<Vec<ReportRecipientRecord>, ReportingDomainError>;
}
