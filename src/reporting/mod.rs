use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::{
        domain::services::token_validation_service::TokenValidationService,
        interfaces::rest::middleware::access_control_middleware::bearer_guard,
    },
    config::app_config::AppConfig,
    notifications::domain::services::notification_dispatch_service::NotificationDispatchService,
    reporting::{
        application::weekly_report_service_impl::WeeklyReportServiceImpl,
        domain::services::weekly_report_service::WeeklyReportService,
        infrastructure::persistence::repositories::postgres::sqlx_report_recipient_repository_impl::SqlxReportRecipientRepositoryImpl,
        interfaces::rest::controllers::reporting_rest_controller::{
            ReportingRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_weekly_report_service(
    config: &AppConfig,
    email_dispatcher: Arc<dyn NotificationDispatchService>,
) -> Result<Arc<dyn WeeklyReportService>, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let recipient_repository = Arc::new(SqlxReportRecipientRepositoryImpl::new(pool));

    Ok(Arc::new(WeeklyReportServiceImpl::new(
        recipient_repository,
        email_dispatcher,
        config.report_base_url.clone(),
        config.report_token_secret.clone(),
    )))
}

pub fn build_reporting_router(
    weekly_report_service: Arc<dyn WeeklyReportService>,
    token_validation_service: Arc<dyn TokenValidationService>,
) -> Router {
    bearer_guard(
        router(ReportingRestControllerState {
            weekly_report_service,
        }),
        token_validation_service,
        &["admin"],
    )
}
