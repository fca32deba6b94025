use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::Utc;

use crate::reporting::{
    domain::{
        model::enums::reporting_domain_error::ReportingDomainError,
        services::weekly_report_service::WeeklyReportService,
    },
    interfaces::rest::resources::{
        reporting_error_response_resource::ReportingErrorResponseResource,
        weekly_report_run_summary_resource::WeeklyReportRunSummaryResource,
    },
};

#[derive(Clone)]
pub struct ReportingRestControllerState {
    pub weekly_report_service: Arc<dyn WeeklyReportService>,
}

pub fn router(state: ReportingRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/reports/weekly/run", post(run_weekly_report))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/reports/weekly/run",
    tag = "reporting",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Corrida completada", body = WeeklyReportRunSummaryResource),
        (status = 401, description = "Auth faltante o inválida", body = ReportingErrorResponseResource),
        (status = 403, description = "Sin permisos", body = ReportingErrorResponseResource),
        (status = 409, description = "Corrida previa en progreso", body = ReportingErrorResponseResource),
        (status = 500, description = "Error interno", body = ReportingErrorResponseResource)
    )
)]
pub async fn run_weekly_report(
    State(state): State<ReportingRestControllerState>,
) -> Result<Json<WeeklyReportRunSummaryResource>, (StatusCode, Json<ReportingErrorResponseResource>)>
{
    let report_date = Utc::now().date_naive();

    let summary = state
        .weekly_report_service
        .run_weekly_report(report_date)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(WeeklyReportRunSummaryResource {
        delivered: summary.delivered,
        failed: summary.failed,
        skipped: summary.skipped,
    }))
}

fn map_domain_error(
    error: ReportingDomainError,
) -> (StatusCode, Json<ReportingErrorResponseResource>) {
    let status = match error {
        ReportingDomainError::RunAlreadyInProgress => StatusCode::CONFLICT,
        ReportingDomainError::RecipientFetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ReportingErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
