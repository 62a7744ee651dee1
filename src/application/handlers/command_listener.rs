use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use chrono_tz::Tz;
use tracing::error;

use crate::{
    application::{
        services::updates::{IncomingMessage, UpdateSource},
        usecases::reply_countdown::ReplyCountdownUseCase,
    },
    domain::models::Destination,
};

const POLL_TIMEOUT_SECS: u64 = 30;
const POLL_RETRY_SECS: u64 = 5;

pub struct CommandListener {
    updates: Arc<dyn UpdateSource>,
    reply: ReplyCountdownUseCase,
    zone: Tz,
}

impl CommandListener {
    pub fn new(updates: Arc<dyn UpdateSource>, reply: ReplyCountdownUseCase, zone: Tz) -> Self {
        Self {
            updates,
            reply,
            zone,
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let mut offset = None;
        loop {
            offset = match self.updates.poll_messages(offset, POLL_TIMEOUT_SECS).await {
                Ok(batch) => self.handle_batch(offset, batch).await,
                Err(err) => {
                    error!("failed to fetch updates: {err:#}");
                    tokio::time::sleep(Duration::from_secs(POLL_RETRY_SECS)).await;
                    offset
                }
            };
        }
    }

    async fn handle_batch(&self, offset: Option<i64>, batch: Vec<IncomingMessage>) -> Option<i64> {
        let mut next = offset;
        for message in batch {
            next = Some(message.update_id + 1);
            if !is_countdown_command(&message.text) {
                continue;
            }
            let destination = Destination::new(message.chat_id);
            let now = Utc::now().with_timezone(&self.zone);
            // failures are logged and answered inside the use case
            let _ = self.reply.execute(&destination, now).await;
        }
        next
    }
}

fn is_countdown_command(text: &str) -> bool {
    let first = text.split_whitespace().next().unwrap_or("");
    first.split('@').next() == Some("/countdown")
}
