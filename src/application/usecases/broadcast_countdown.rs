use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::{error, info, warn};

use crate::{
    application::services::notifier::NotifierClient,
    domain::{
        errors::{ConfigError, DeliveryError},
        models::{Countdown, Destination, MessageTemplate, TargetMoment},
    },
};

pub struct BroadcastConfig {
    pub destinations: Vec<Destination>,
    pub pin_after_send: bool,
}

pub struct BroadcastCountdownUseCase {
    notifier: Arc<dyn NotifierClient>,
    target: TargetMoment,
    template: MessageTemplate,
    config: BroadcastConfig,
}

#[derive(Debug, Default)]
pub struct BroadcastReport {
    pub sent: Vec<Destination>,
    pub failed: Vec<(Destination, DeliveryError)>,
}

impl BroadcastCountdownUseCase {
    pub fn new(
        notifier: Arc<dyn NotifierClient>,
        target: TargetMoment,
        template: MessageTemplate,
        config: BroadcastConfig,
    ) -> Self {
        Self {
            notifier,
            target,
            template,
            config,
        }
    }

    pub async fn execute(&self, now: DateTime<Tz>) -> Result<BroadcastReport, ConfigError> {
        if self.config.destinations.is_empty() {
            return Err(ConfigError::NoDestinations);
        }

        let countdown = Countdown::at(&self.target, now);
        let content = self.template.render(&countdown);

        let mut report = BroadcastReport::default();
        for destination in &self.config.destinations {
            match self.notifier.send(destination, &content).await {
                Ok(handle) => {
                    info!("message sent to chat {}", destination.chat_id);
                    if self.config.pin_after_send {
                        // best effort; a failed pin never fails the delivery
                        match self.notifier.pin(&handle, true).await {
                            Ok(()) => info!("message pinned in chat {}", destination.chat_id),
                            Err(err) => {
                                warn!("pinning failed in chat {}: {}", destination.chat_id, err)
                            }
                        }
                    }
                    report.sent.push(destination.clone());
                }
                Err(err) => {
                    error!(
                        "failed to send message to chat {}: {}",
                        destination.chat_id, err
                    );
                    report.failed.push((destination.clone(), err));
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, Utc};
    use chrono_tz::Europe::Dublin;

    use super::*;
    use crate::application::services::notifier::testing::RecordingNotifier;
    use crate::domain::models::UnitDisplay;

    fn target() -> TargetMoment {
        let local = NaiveDate::from_ymd_opt(2030, 8, 16)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        TargetMoment::from_local(local, Dublin).unwrap()
    }

    fn template() -> MessageTemplate {
        MessageTemplate {
            title: "Tour Countdown".to_string(),
            footer: "Next update in 24 hours".to_string(),
            units: UnitDisplay::default(),
        }
    }

    fn usecase(
        notifier: Arc<RecordingNotifier>,
        destinations: Vec<Destination>,
        pin_after_send: bool,
    ) -> BroadcastCountdownUseCase {
        BroadcastCountdownUseCase::new(
            notifier,
            target(),
            template(),
            BroadcastConfig {
                destinations,
                pin_after_send,
            },
        )
    }

    #[tokio::test]
    async fn one_failed_destination_does_not_block_the_rest() {
        let notifier = Arc::new(RecordingNotifier {
            fail_sends_to: Some("-100A".to_string()),
            ..RecordingNotifier::default()
        });
        let destinations = vec![Destination::new("-100A"), Destination::new("-100B")];
        let report = usecase(notifier.clone(), destinations, false)
            .execute(Utc::now().with_timezone(&Dublin))
            .await
            .unwrap();

        assert_eq!(report.sent, vec![Destination::new("-100B")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, Destination::new("-100A"));
        assert_eq!(notifier.sent.read().await.len(), 1);
    }

    #[tokio::test]
    async fn empty_destination_list_aborts_before_any_send() {
        let notifier = Arc::new(RecordingNotifier::default());
        let result = usecase(notifier.clone(), vec![], false)
            .execute(Utc::now().with_timezone(&Dublin))
            .await;

        assert!(matches!(result, Err(ConfigError::NoDestinations)));
        assert!(notifier.attempts.read().await.is_empty());
    }

    #[tokio::test]
    async fn pin_failure_still_counts_destination_as_sent() {
        let notifier = Arc::new(RecordingNotifier {
            fail_pins: true,
            ..RecordingNotifier::default()
        });
        let report = usecase(notifier.clone(), vec![Destination::new("-100A")], true)
            .execute(Utc::now().with_timezone(&Dublin))
            .await
            .unwrap();

        assert_eq!(report.sent, vec![Destination::new("-100A")]);
        assert!(report.failed.is_empty());
        assert!(notifier.pinned.read().await.is_empty());
    }

    #[tokio::test]
    async fn pin_is_only_attempted_when_configured() {
        let notifier = Arc::new(RecordingNotifier::default());
        usecase(notifier.clone(), vec![Destination::new("-100A")], false)
            .execute(Utc::now().with_timezone(&Dublin))
            .await
            .unwrap();
        assert!(notifier.pinned.read().await.is_empty());

        let pinning = Arc::new(RecordingNotifier::default());
        usecase(pinning.clone(), vec![Destination::new("-100A")], true)
            .execute(Utc::now().with_timezone(&Dublin))
            .await
            .unwrap();
        assert_eq!(*pinning.pinned.read().await, vec!["-100A".to_string()]);
    }

    #[tokio::test]
    async fn every_destination_receives_the_same_body() {
        let notifier = Arc::new(RecordingNotifier::default());
        let destinations = vec![Destination::new("-100A"), Destination::new("-100B")];
        usecase(notifier.clone(), destinations, false)
            .execute(Utc::now().with_timezone(&Dublin))
            .await
            .unwrap();

        let sent = notifier.sent.read().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].1, sent[1].1);
        assert!(sent[0].1.contains("days"));
    }
}
