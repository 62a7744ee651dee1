use std::env::var;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use dotenvy::dotenv;

use crate::domain::{
    errors::ConfigError,
    models::{Destination, MessageTemplate, TargetMoment, UnitDisplay},
};

const TARGET_FORMAT: &str = "%Y-%m-%d %H:%M";
const DEFAULT_OPS_TZ: Tz = chrono_tz::Europe::Zurich;
const DEFAULT_FOOTER: &str = "Next update in 24 hours";

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub target: TargetMoment,
    pub ops_zone: Tz,
    pub destinations: Vec<Destination>,
    pub template: MessageTemplate,
    pub pin_after_send: bool,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();

        let bot_token = require("BOT_TOKEN")?;

        let event_zone = parse_zone(&require("EVENT_TZ")?)?;
        let target_raw = require("TARGET_TIME")?;
        let local = NaiveDateTime::parse_from_str(target_raw.trim(), TARGET_FORMAT).map_err(
            |err| ConfigError::InvalidVar {
                name: "TARGET_TIME",
                reason: format!("expected {TARGET_FORMAT}: {err}"),
            },
        )?;
        let target = TargetMoment::from_local(local, event_zone)?;

        let ops_zone = match var("OPS_TZ") {
            Ok(value) => parse_zone(&value)?,
            Err(_) => DEFAULT_OPS_TZ,
        };

        let destinations = Destination::parse_list(&require("CHAT_IDS")?);
        if destinations.is_empty() {
            return Err(ConfigError::NoDestinations);
        }

        let template = MessageTemplate {
            title: require("EVENT_TITLE")?,
            footer: var("FOOTER_TEXT").unwrap_or_else(|_| DEFAULT_FOOTER.to_string()),
            units: UnitDisplay {
                include_hours: parse_flag("INCLUDE_HOURS")?.unwrap_or(false),
                include_minutes: parse_flag("INCLUDE_MINUTES")?.unwrap_or(false),
                include_seconds: parse_flag("INCLUDE_SECONDS")?.unwrap_or(false),
            },
        };

        Ok(Config {
            bot_token,
            target,
            ops_zone,
            destinations,
            template,
            pin_after_send: parse_flag("PIN_AFTER_SEND")?.unwrap_or(false),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn parse_zone(value: &str) -> Result<Tz, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::UnknownTimezone(value.to_string()))
}

fn parse_flag(name: &'static str) -> Result<Option<bool>, ConfigError> {
    match var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar {
                name,
                reason: format!("expected true or false, got '{value}'"),
            }),
        Err(_) => Ok(None),
    }
}
