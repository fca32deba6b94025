use std::sync::Arc;

use async_trait::async_trait;

use crate::notifications::{
    domain::{
        model::{
            entities::notification_data::NotificationData,
            enums::{
                notification_domain_error::NotificationDomainError, push_priority::PushPriority,
            },
        },
        services::notification_dispatch_service::NotificationDispatchService,
    },
    interfaces::acl::push_gateway_facade::{PushGatewayFacade, PushMessage},
};

pub struct PushNotificationChannelImpl {
    push_gateway: Arc<dyn PushGatewayFacade>,
}

impl PushNotificationChannelImpl {
    pub fn new(push_gateway: Arc<dyn PushGatewayFacade>) -> Self {
        Self { push_gateway }
    }
}

#[async_trait]
impl NotificationDispatchService for PushNotificationChannelImpl {
    async fn send_notification(
        &self,
        notification: &NotificationData,
    ) -> Result<(), NotificationDomainError> {
        // Zero registered devices is a successful no-op; the gateway is not
        // contacted.
        if notification.addresses.is_empty() {
            return Ok(());
        }

        let messages = notification
            .addresses
            .iter()
            .map(|device_token| PushMessage {
                device_token: device_token.clone(),
                title: notification.title.clone(),
                body: notification.body.clone(),
                priority: PushPriority::High,
            })
            .collect::<Vec<_>>();

        self.push_gateway
            .send_batch(messages)
            .await
            .map(|_| ())
            .map_err(|error| NotificationDomainError::DeliveryFailed(error.to_string()))
    }
}
