use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub update_id: i64,
    pub chat_id: String,
    pub text: String,
}

#[async_trait]
pub trait UpdateSource: Send + Sync {
    async fn poll_messages(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> anyhow::Result<Vec<IncomingMessage>>;
}
