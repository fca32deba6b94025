use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WeeklyReportRunSummaryResource {
    pub delivered: u32,
    pub failed: u32,
    pub skipped: u32,
}
