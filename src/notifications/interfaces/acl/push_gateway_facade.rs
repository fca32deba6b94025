use async_trait::async_trait;

use crate::notifications::{
    domain::model::enums::push_priority::PushPriority,
    interfaces::acl::email_transport_facade::NotificationTransportError,
};

#[derive(Clone, Debug)]
pub struct PushMessage {
    pub device_token: String,
    pub title: String,
    pub body: String,
    pub priority: PushPriority,
}

#[derive(Clone, Debug)]
pub struct PushBatchResult {
    pub delivered: u32,
    pub failed: u32,
}

#[async_trait]
pub trait PushGatewayFacade: Send + Sync {
    async fn send_batch(
        &self,
        messages: Vec<PushMessage>,
    ) -> Result<PushBatchResult, NotificationTransportError>;
}
