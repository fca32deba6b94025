use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum NotificationTransportError {
    #[error("delivery rejected: {0}")]
    Rejected(String),

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

// One logical send is one transport call, whatever the recipient count. The
// relay host, credentials and from-address belong to the implementation.
#[async_trait]
pub trait EmailTransportFacade: Send + Sync {
    async fn send_mail(
        &self,
        to_addresses: &[String],
        raw_message: &[u8],
    ) -> Result<(), NotificationTransportError>;
}
