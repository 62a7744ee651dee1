use async_trait::async_trait;

use crate::domain::{
    errors::{DeliveryError, PinError},
    models::{Destination, MessageContent},
};

#[derive(Debug, Clone)]
pub struct MessageHandle {
    pub chat_id: String,
    pub message_id: i64,
}

#[async_trait]
pub trait NotifierClient: Send + Sync {
    async fn send(
        &self,
        destination: &Destination,
        content: &MessageContent,
    ) -> Result<MessageHandle, DeliveryError>;

    async fn pin(
        &self,
        handle: &MessageHandle,
        disable_notification: bool,
    ) -> Result<(), PinError>;
}
