use async_trait::async_trait;
use sqlx::PgPool;

use crate::reporting::{
    domain::model::enums::reporting_domain_error::ReportingDomainError,
    infrastructure::persistence::repositories::report_recipient_repository::{
        ReportRecipientRecord, ReportRecipientRepository,
    },
};

pub struct SqlxReportRecipientRepositoryImpl {
    pool: PgPool,
}

impl SqlxReportRecipientRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRecipientRepository for SqlxReportRecipientRepositoryImpl {
    async fn list_report_recipients(
        &self,
    ) -> Result<Vec<ReportRecipientRecord>, ReportingDomainError> {
        let statement = r#"
            SELECT user_id, email, full_name
            FROM representatives
            WHERE weekly_report_enabled = TRUE
            ORDER BY user_id
        "#;

        let rows = sqlx::query_as::<_, (Option<String>, Option<String>, Option<String>)>(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ReportingDomainError::RecipientFetchFailed(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(user_id, email, full_name)| ReportRecipientRecord {
                subject_id: user_id.unwrap_or_default(),
                email: email.unwrap_or_default(),
                display_name: full_name.unwrap_or_default(),
            })
            .collect())
    }
}
