use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::notifications::{
    domain::{
        model::{
            entities::notification_data::NotificationData,
            enums::notification_domain_error::NotificationDomainError,
        },
        services::notification_dispatch_service::NotificationDispatchService,
    },
    interfaces::rest::resources::{
        announcement_request_resource::AnnouncementRequestResource,
        notification_error_response_resource::NotificationErrorResponseResource,
    },
};

#[derive(Clone)]
pub struct AnnouncementRestControllerState {
    pub email_dispatcher: Arc<dyn NotificationDispatchService>,
    pub push_dispatcher: Arc<dyn NotificationDispatchService>,
}

pub fn router(state: AnnouncementRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/announcements", post(publish_announcement))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/announcements",
    tag = "notifications",
    request_body = AnnouncementRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 202, description = "Anuncio aceptado para entrega"),
        (status = 400, description = "Request inválido", body = NotificationErrorResponseResource),
        (status = 401, description = "Auth faltante o inválida", body = NotificationErrorResponseResource),
        (status = 403, description = "Sin permisos", body = NotificationErrorResponseResource),
        (status = 502, description = "Fallo de entrega", body = NotificationErrorResponseResource)
    )
)]
pub async fn publish_announcement(
    State(state): State<AnnouncementRestControllerState>,
    Json(resource): Json<AnnouncementRequestResource>,
) -> Result<StatusCode, (StatusCode, Json<NotificationErrorResponseResource>)> {
    if let Err(validation_error) = resource.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(NotificationErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let dispatcher = match resource.channel.as_str() {
        "email" => &state.email_dispatcher,
        "push" => &state.push_dispatcher,
        _ => return Err(map_domain_error(NotificationDomainError::InvalidChannel)),
    };

    let notification = NotificationData {
        addresses: resource.addresses,
        title: resource.title,
        body: resource.message,
    };

    dispatcher
        .send_notification(&notification)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::ACCEPTED)
}

fn map_domain_error(
    error: NotificationDomainError,
) -> (StatusCode, Json<NotificationErrorResponseResource>) {
    let status = match error {
        NotificationDomainError::InvalidChannel => StatusCode::BAD_REQUEST,
        NotificationDomainError::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(NotificationErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
