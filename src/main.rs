use std::{sync::Arc, time::Duration};

use axum::Router;
use dotenvy::dotenv;
use education_platform_api::{
    access_control::{
        application::token_validation_service_impl::TokenValidationServiceImpl,
        domain::services::token_validation_service::TokenValidationService,
        interfaces::rest::resources::access_control_error_response_resource::AccessControlErrorResponseResource,
    },
    config::app_config::AppConfig,
    iam_integration::application::acl::grpc_identity_provider_facade_impl::GrpcIdentityProviderFacadeImpl,
    notifications::{
        application::{
            acl::{
                grpc_email_transport_facade_impl::GrpcEmailTransportFacadeImpl,
                grpc_push_gateway_facade_impl::GrpcPushGatewayFacadeImpl,
            },
            channels::{
                email_notification_channel_impl::EmailNotificationChannelImpl,
                push_notification_channel_impl::PushNotificationChannelImpl,
            },
        },
        build_notifications_router,
        domain::services::notification_dispatch_service::NotificationDispatchService,
        interfaces::rest::resources::{
            announcement_request_resource::AnnouncementRequestResource,
            notification_error_response_resource::NotificationErrorResponseResource,
        },
    },
    reporting::{
        application::weekly_report_scheduler::WeeklyReportScheduler,
        build_reporting_router, build_weekly_report_service,
        interfaces::rest::resources::{
            reporting_error_response_resource::ReportingErrorResponseResource,
            weekly_report_run_summary_resource::WeeklyReportRunSummaryResource,
        },
    },
    shared::interfaces::rest::openapi::security::BearerSecurityAddon,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        education_platform_api::notifications::interfaces::rest::controllers::announcement_rest_controller::publish_announcement,
        education_platform_api::reporting::interfaces::rest::controllers::reporting_rest_controller::run_weekly_report
    ),
    components(
        schemas(
            AnnouncementRequestResource,
            NotificationErrorResponseResource,
            WeeklyReportRunSummaryResource,
            ReportingErrorResponseResource,
            AccessControlErrorResponseResource
        )
    ),
    tags(
        (name = "notifications", description = "Multi-channel notification dispatch bounded context"),
        (name = "reporting", description = "Weekly report generation bounded context")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let identity_provider = Arc::new(GrpcIdentityProviderFacadeImpl::new(
        config.identity_grpc_endpoint.clone(),
        Duration::from_millis(config.identity_timeout_ms),
        Duration::from_millis(config.identity_decode_cache_ttl_ms),
        5,
        Duration::from_secs(30),
    ));
    let token_validation_service: Arc<dyn TokenValidationService> =
        Arc::new(TokenValidationServiceImpl::new(identity_provider));

    let email_transport = Arc::new(GrpcEmailTransportFacadeImpl::new(
        config.notification_grpc_endpoint.clone(),
        Duration::from_millis(config.notification_timeout_ms),
        config.mail_from_address.clone(),
    ));
    let push_gateway = Arc::new(GrpcPushGatewayFacadeImpl::new(
        config.notification_grpc_endpoint.clone(),
        Duration::from_millis(config.notification_timeout_ms),
    ));

    let email_dispatcher: Arc<dyn NotificationDispatchService> =
        Arc::new(EmailNotificationChannelImpl::new(
            email_transport,
            config.mail_from_address.clone(),
            "Notificación de la plataforma educativa".to_string(),
        ));
    let push_dispatcher: Arc<dyn NotificationDispatchService> =
        Arc::new(PushNotificationChannelImpl::new(push_gateway));

    let weekly_report_service = build_weekly_report_service(&config, email_dispatcher.clone())
        .await
        .expect("failed to build weekly report service");

    let _scheduler = if config.weekly_report_scheduler_enabled {
        Some(WeeklyReportScheduler::spawn(
            weekly_report_service.clone(),
            config.report_weekday,
            config.report_hour_utc,
        ))
    } else {
        None
    };

    let notifications_router = build_notifications_router(
        token_validation_service.clone(),
        email_dispatcher,
        push_dispatcher,
    );
    let reporting_router = build_reporting_router(weekly_report_service, token_validation_service);

    let app = Router::new()
        .merge(notifications_router)
        .merge(reporting_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, "education platform api listening");
    tracing::info!(
        "Swagger UI disponible en http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
