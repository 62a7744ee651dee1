use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set in environment")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("target time {0} does not exist in {1} (skipped by DST)")]
    NonexistentLocalTime(String, String),
    #[error("target time {0} is ambiguous in {1} (repeated by DST)")]
    AmbiguousLocalTime(String, String),
    #[error("destination list is empty; nothing to send")]
    NoDestinations,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("chat not found: {0}")]
    ChatNotFound(String),
    #[error("telegram api error {code}: {description}")]
    Api { code: i64, description: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum PinError {
    #[error("not allowed to pin: {0}")]
    Forbidden(String),
    #[error("telegram api error {code}: {description}")]
    Api { code: i64, description: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
