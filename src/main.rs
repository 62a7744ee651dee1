use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use countdown_bot::{
    application::{
        handlers::command_listener::CommandListener,
        usecases::{
            broadcast_countdown::{BroadcastConfig, BroadcastCountdownUseCase},
            reply_countdown::ReplyCountdownUseCase,
        },
    },
    config::Config,
    infrastructure::messaging::TelegramClient,
};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::try_parse()?;
    let telegram = Arc::new(TelegramClient::new(config.bot_token.clone()));

    let now_event = Utc::now().with_timezone(&config.target.zone());
    let now_ops = Utc::now().with_timezone(&config.ops_zone);
    info!(
        "preparing countdown | event time now: {} | ops time now: {}",
        now_event.format("%Y-%m-%d %H:%M:%S %Z"),
        now_ops.format("%Y-%m-%d %H:%M:%S %Z"),
    );

    match args.command.unwrap_or(cli::Command::Send) {
        cli::Command::Send => {
            let broadcast = BroadcastCountdownUseCase::new(
                telegram,
                config.target.clone(),
                config.template.clone(),
                BroadcastConfig {
                    destinations: config.destinations.clone(),
                    pin_after_send: config.pin_after_send,
                },
            );
            let report = broadcast.execute(now_event).await?;
            info!(
                "broadcast finished: {} sent, {} failed",
                report.sent.len(),
                report.failed.len()
            );
        }
        cli::Command::Listen => {
            info!("listening for /countdown commands...");
            let reply = ReplyCountdownUseCase::new(
                telegram.clone(),
                config.target.clone(),
                config.template.clone(),
                config.pin_after_send,
            );
            let listener = CommandListener::new(telegram, reply, config.target.zone());
            listener.run().await?;
        }
    }

    Ok(())
}
