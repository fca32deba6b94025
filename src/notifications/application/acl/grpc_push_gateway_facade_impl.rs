use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};

use crate::{
    notification_grpc::{
        PushMessagePayload, SendPushBatchRequest,
        notification_delivery_service_client::NotificationDeliveryServiceClient,
    },
    notifications::interfaces::acl::{
        email_transport_facade::NotificationTransportError,
        push_gateway_facade::{PushBatchResult, PushGatewayFacade, PushMessage},
    },
};

pub struct GrpcPushGatewayFacadeImpl {
    endpoint: String,
    timeout: Duration,
}

impl GrpcPushGatewayFacadeImpl {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    async fn grpc_client(
        &self,
    ) -> Result<NotificationDeliveryServiceClient<Channel>, NotificationTransportError> {
        let endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| NotificationTransportError::Unavailable(e.to_string()))?
            .connect_timeout(self.timeout)
            .timeout(self.timeout);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| NotificationTransportError::Unavailable(e.to_string()))?;

        Ok(NotificationDeliveryServiceClient::new(channel))
    }
}

#[async_trait]
impl PushGatewayFacade for GrpcPushGatewayFacadeImpl {
    async fn send_batch(
        &self,
        messages: Vec<PushMessage>,
    ) -> Result<PushBatchResult, NotificationTransportError> {
        let mut client = self.grpc_client().await?;

        let payloads = messages
            .into_iter()
            .map(|message| PushMessagePayload {
                device_token: message.device_token,
                title: message.title,
                body: message.body,
                priority: message.priority.as_str().to_string(),
            })
            .collect::<Vec<_>>();

        let response = client
            .send_push_batch(SendPushBatchRequest { messages: payloads })
            .await
            .map_err(|error| NotificationTransportError::Unavailable(error.to_string()))?
            .into_inner();

        if !response.error_message.is_empty() {
            return Err(NotificationTransportError::Rejected(
                response.error_message,
            ));
        }

        Ok(PushBatchResult {
            delivered: response.delivered_count,
            failed: response.failed_count,
        })
    }
}
