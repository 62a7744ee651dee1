use clap::{Parser, Subcommand};

const HELP_EPILOG: &str = r#"Configuration comes from environment variables (a .env file is honored):
  BOT_TOKEN        Telegram bot token (required)
  CHAT_IDS         comma-separated chat ids to broadcast to (required)
  TARGET_TIME      target local date-time, e.g. "2025-11-11 19:30" (required)
  EVENT_TZ         IANA timezone of the target, e.g. Europe/Dublin (required)
  EVENT_TITLE      countdown title used in the messages (required)
  OPS_TZ           timezone for operational log lines (default: Europe/Zurich)
  INCLUDE_HOURS    add an hours line to the message (default: false)
  INCLUDE_MINUTES  add a minutes line to the message (default: false)
  INCLUDE_SECONDS  add a seconds line to the message (default: false)
  PIN_AFTER_SEND   pin each delivered message, best effort (default: false)
  FOOTER_TEXT      footer line (default: "Next update in 24 hours")
"#;

#[derive(Debug, Parser)]
#[command(
    name = "countdown-bot",
    version,
    about = "Telegram countdown notifier",
    long_about = None,
    after_long_help = HELP_EPILOG,
)]
pub struct Cli {
    /// Optional subcommand. Without one, runs a one-shot broadcast.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send the countdown once to every configured chat (for external schedulers)
    Send,
    /// Long-poll for /countdown commands and reply in the invoking chat
    Listen,
}
