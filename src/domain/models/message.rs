use serde::{Deserialize, Serialize};

use super::countdown::Countdown;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    Markdown,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContent {
    pub body: String,
    pub parse_mode: ParseMode,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UnitDisplay {
    pub include_hours: bool,
    pub include_minutes: bool,
    pub include_seconds: bool,
}

#[derive(Debug, Clone)]
pub struct MessageTemplate {
    pub title: String,
    pub footer: String,
    pub units: UnitDisplay,
}

impl MessageTemplate {
    pub fn render(&self, countdown: &Countdown) -> MessageContent {
        let body = match countdown {
            Countdown::Started => format!("🎉 {} has begun! 🎉", escape_markdown(&self.title)),
            Countdown::Pending {
                days,
                hours,
                minutes,
                seconds,
            } => {
                let mut body = format!("⏳ **{}** ⏳\n\n", escape_markdown(&self.title));
                body.push_str(&format!("🗓️ **{days} days**\n"));
                if self.units.include_hours {
                    body.push_str(&format!("🕒 **{hours} hours**\n"));
                }
                if self.units.include_minutes {
                    body.push_str(&format!("⏱️ **{minutes} minutes**\n"));
                }
                if self.units.include_seconds {
                    body.push_str(&format!("⏲️ **{seconds} seconds**\n"));
                }
                body.push_str(&format!("\n_{}_", escape_markdown(&self.footer)));
                body
            }
        };

        MessageContent {
            body,
            parse_mode: ParseMode::Markdown,
        }
    }
}

// characters the legacy Markdown parse mode treats as markup
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
