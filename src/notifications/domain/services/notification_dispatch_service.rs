use async_trait::async_trait;

use crate::notifications::domain::model::{
    entities::notification_data::NotificationData,
    enums::notification_domain_error::NotificationDomainError,
};

// The one capability callers depend on. Which transport actually carries the
// message is decided when a concrete channel is constructed, never by the
// caller at send time.
#[async_trait]
pub trait NotificationDispatchService: Send + Sync {
    async fn send_notification(
        &self,
        notification: &NotificationData,
    ) -> Result<(), NotificationDomainError>;
}
