use std::sync::Arc;

use axum::Router;

use crate::{
    access_control::{
        domain::services::token_validation_service::TokenValidationService,
        interfaces::rest::middleware::access_control_middleware::{bearer_guard, websocket_guard},
    },
    notifications::{
        domain::services::notification_dispatch_service::NotificationDispatchService,
        interfaces::rest::controllers::{
            announcement_rest_controller::{self, AnnouncementRestControllerState},
            notification_stream_controller,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_notifications_router(
    token_validation_service: Arc<dyn TokenValidationService>,
    email_dispatcher: Arc<dyn NotificationDispatchService>,
    push_dispatcher: Arc<dyn NotificationDispatchService>,
) -> Router {
    let announcements = bearer_guard(
        announcement_rest_controller::router(AnnouncementRestControllerState {
            email_dispatcher,
            push_dispatcher,
        }),
        token_validation_service.clone(),
        &["admin", "teacher"],
    );

    let stream = websocket_guard(
        notification_stream_controller::router(),
        token_validation_service,
        &[],
    );

    announcements.merge(stream)
}
