use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::{error, info, warn};

use crate::{
    application::services::notifier::NotifierClient,
    domain::{
        errors::DeliveryError,
        models::{Countdown, Destination, MessageContent, MessageTemplate, ParseMode, TargetMoment},
    },
};

pub const FAILURE_NOTICE: &str = "⚠️ Failed to update countdown";

pub struct ReplyCountdownUseCase {
    notifier: Arc<dyn NotifierClient>,
    target: TargetMoment,
    template: MessageTemplate,
    pin_after_send: bool,
}

impl ReplyCountdownUseCase {
    pub fn new(
        notifier: Arc<dyn NotifierClient>,
        target: TargetMoment,
        template: MessageTemplate,
        pin_after_send: bool,
    ) -> Self {
        Self {
            notifier,
            target,
            template,
            pin_after_send,
        }
    }

    pub async fn execute(
        &self,
        destination: &Destination,
        now: DateTime<Tz>,
    ) -> Result<(), DeliveryError> {
        let countdown = Countdown::at(&self.target, now);
        let content = self.template.render(&countdown);

        let handle = match self.notifier.send(destination, &content).await {
            Ok(handle) => handle,
            Err(err) => {
                error!(
                    "failed to send countdown to chat {}: {}",
                    destination.chat_id, err
                );
                self.send_failure_notice(destination).await;
                return Err(err);
            }
        };
        info!("message sent to chat {}", destination.chat_id);

        if self.pin_after_send {
            match self.notifier.pin(&handle, true).await {
                Ok(()) => info!("message pinned in chat {}", destination.chat_id),
                Err(err) => warn!("pinning failed in chat {}: {}", destination.chat_id, err),
            }
        }

        Ok(())
    }

    async fn send_failure_notice(&self, destination: &Destination) {
        let notice = MessageContent {
            body: FAILURE_NOTICE.to_string(),
            parse_mode: ParseMode::Markdown,
        };
        if let Err(err) = self.notifier.send(destination, &notice).await {
            warn!(
                "failure notice to chat {} also failed: {}",
                destination.chat_id, err
            );
        }
    }
}
