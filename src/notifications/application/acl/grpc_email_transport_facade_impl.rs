use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};

use crate::{
    notification_grpc::{
        SendEmailRequest, notification_delivery_service_client::NotificationDeliveryServiceClient,
    },
    notifications::interfaces::acl::email_transport_facade::{
        EmailTransportFacade, NotificationTransportError,
    },
};

pub struct GrpcEmailTransportFacadeImpl {
    endpoint: String,
    timeout: Duration,
    from_address: String,
}

impl GrpcEmailTransportFacadeImpl {
    pub fn new(endpoint: String, timeout: Duration, from_address: String) -> Self {
        Self {
            endpoint,
            timeout,
            from_address,
        }
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
impl EmailTransportFacade for GrpcEmailTransportFacadeImpl {
    async fn send_mail(
        &self,
        to_addresses: &[String],
        raw_message: &[u8],
    ) -> Result<(), NotificationTransportError> {
        let mut client = self.grpc_client().await?;

        let response = client
            .send_email(SendEmailRequest {
                from_address: self.from_address.clone(),
                to_addresses: to_addresses.to_vec(),
                raw_message: raw_message.to_vec(),
            })
            .await
            .map_err(|error| NotificationTransportError::Unavailable(error.to_string()))?
            .into_inner();

        if !response.accepted {
            return Err(NotificationTransportError::Rejected(
                response.error_message,
            ));
        }

        Ok(())
    }
}
