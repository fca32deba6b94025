use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationDomainError {
    #[error("notification channel is invalid")]
    InvalidChannel,

    #[error("notification delivery failed: {0}")]
    DeliveryFailed(String),
}
