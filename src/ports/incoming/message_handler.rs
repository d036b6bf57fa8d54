use crate::adapters::protocol::messages::{KafkaRequest, KafkaResponse};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle_request(&self, request: KafkaRequest) -> Result<KafkaResponse>;
}
