use std::sync::Arc;

use async_trait::async_trait;

use crate::notifications::{
    domain::{
        model::{
            entities::notification_data::NotificationData,
            enums::notification_domain_error::NotificationDomainError,
        },
        services::notification_dispatch_service::NotificationDispatchService,
    },
    interfaces::acl::email_transport_facade::EmailTransportFacade,
};

pub struct EmailNotificationChannelImpl {
    email_transport: Arc<dyn EmailTransportFacade>,
    from_address: String,
    subject: String,
}

impl EmailNotificationChannelImpl {
    pub fn new(
        email_transport: Arc<dyn EmailTransportFacade>,
        from_address: String,
        subject: String,
    ) -> Self {
        Self {
            email_transport,
            from_address,
            subject,
        }
    }

    fn build_raw_message(&self, recipient_list: &str, body: &str) -> Vec<u8> {
        format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/plain; charset=utf-8\r\n\r\n{}",
            self.from_address, recipient_list, self.subject, body
        )
        .into_bytes()
    }
}

#[async_trait]
impl NotificationDispatchService for EmailNotificationChannelImpl {
    // All addresses travel in one envelope on one transport call; there is no
    // per-recipient partial success inside this channel.
    async fn send_notification(
        &self,
        notification: &NotificationData,
    ) -> Result<(), NotificationDomainError> {
        if notification.addresses.is_empty() {
            return Ok(());
        }

        let recipient_list = notification.addresses.join(", ");
        let raw_message = self.build_raw_message(&recipient_list, &notification.body);

        self.email_transport
            .send_mail(&notification.addresses, &raw_message)
            .await
            .map_err(|error| NotificationDomainError::DeliveryFailed(error.to_string()))
    }
}
