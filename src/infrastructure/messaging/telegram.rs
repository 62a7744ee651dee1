use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    application::services::{
        notifier::{MessageHandle, NotifierClient},
        updates::{IncomingMessage, UpdateSource},
    },
    domain::{
        errors::{DeliveryError, PinError},
        models::{Destination, MessageContent},
    },
};

pub struct TelegramClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::builder()
                .user_agent("countdown-bot/telegram")
                .build()
                .expect("failed to build telegram client"),
            base_url: "https://api.telegram.org".to_string(),
            token: token.into(),
        }
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }
}

#[async_trait]
impl NotifierClient for TelegramClient {
    async fn send(
        &self,
        destination: &Destination,
        content: &MessageContent,
    ) -> Result<MessageHandle, DeliveryError> {
        let url = self.build_url("sendMessage");
        let response = self
            .http
            .post(url)
            .json(&SendMessageRequest {
                chat_id: &destination.chat_id,
                text: &content.body,
                parse_mode: content.parse_mode.as_str(),
            })
            .send()
            .await?;

        let payload: TelegramResponse<TelegramMessage> = response.json().await?;
        if !payload.ok {
            let code = payload.error_code.unwrap_or(0);
            let description = payload
                .description
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(match code {
                401 | 403 => DeliveryError::Auth(description),
                400 if description.to_lowercase().contains("chat not found") => {
                    DeliveryError::ChatNotFound(destination.chat_id.clone())
                }
                _ => DeliveryError::Api { code, description },
            });
        }

        let message = payload.result.ok_or(DeliveryError::Api {
            code: 0,
            description: "empty response body".to_string(),
        })?;

        Ok(MessageHandle {
            chat_id: message.chat.id.to_string(),
            message_id: message.message_id,
        })
    }

    async fn pin(
        &self,
        handle: &MessageHandle,
        disable_notification: bool,
    ) -> Result<(), PinError> {
        let url = self.build_url("pinChatMessage");
        let response = self
            .http
            .post(url)
            .json(&PinChatMessageRequest {
                chat_id: &handle.chat_id,
                message_id: handle.message_id,
                disable_notification,
            })
            .send()
            .await?;

        let payload: TelegramResponse<bool> = response.json().await?;
        if !payload.ok {
            let code = payload.error_code.unwrap_or(0);
            let description = payload
                .description
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(match code {
                403 => PinError::Forbidden(description),
                400 if description.to_lowercase().contains("not enough rights") => {
                    PinError::Forbidden(description)
                }
                _ => PinError::Api { code, description },
            });
        }

        Ok(())
    }
}

#[async_trait]
impl UpdateSource for TelegramClient {
    async fn poll_messages(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> anyhow::Result<Vec<IncomingMessage>> {
        let url = self.build_url("getUpdates");
        let mut query = vec![
            ("timeout", timeout_secs.to_string()),
            ("allowed_updates", r#"["message"]"#.to_string()),
        ];
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }

        let response = self.http.get(url).query(&query).send().await?;
        let payload: TelegramResponse<Vec<TelegramUpdate>> = response.json().await?;
        if !payload.ok {
            anyhow::bail!(
                "telegram api returned error: {}",
                payload
                    .description
                    .unwrap_or_else(|| "unknown error".to_string())
            );
        }

        let mut messages = Vec::new();
        for update in payload.result.unwrap_or_default() {
            let Some(message) = update.message else {
                continue;
            };
            let Some(text) = message.text else {
                continue;
            };
            messages.push(IncomingMessage {
                update_id: update.update_id,
                chat_id: message.chat.id.to_string(),
                text,
            });
        }

        Ok(messages)
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Debug, Serialize)]
struct PinChatMessageRequest<'a> {
    chat_id: &'a str,
    message_id: i64,
    disable_notification: bool,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    description: Option<String>,
    #[serde(rename = "error_code")]
    error_code: Option<i64>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct TelegramUpdate {
    #[serde(rename = "update_id")]
    update_id: i64,
    message: Option<TelegramIncoming>,
}

#[derive(Debug, Deserialize)]
struct TelegramIncoming {
    text: Option<String>,
    chat: TelegramChat,
}

#[derive(Debug, Deserialize)]
struct TelegramMessage {
    #[serde(rename = "message_id")]
    message_id: i64,
    chat: TelegramChat,
}

#[derive(Debug, Deserialize)]
struct TelegramChat {
    id: i64,
}
