mod backend;
mod config;
mod notifier;
mod payload;

use anyhow::Result;
use config::{Command, Config};
use notifier::{LoggingNotifier, Notifier};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with environment filter
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting notification-stub v0.1.0");

    let config = Config::load()?;
    info!("Configuration loaded: mode={}", config.mode.as_str());

    let notifier = LoggingNotifier::instance();
    dispatch(notifier, &config.command).await?;

    info!("Sent {} notification", config.command.name());
    Ok(())
}

/// Run a command against any notifier
async fn dispatch<N: Notifier>(notifier: &N, command: &Command) -> Result<()> {
    let payload = command.payload()?.unwrap_or_default();

    match command {
        Command::DailyReport { .. } => notifier.send_daily_report(&payload).await,
        Command::TradeAlert { .. } => notifier.send_trade_alert(&payload).await,
        Command::Telegram { text } => notifier.send_telegram_message(text).await,
        Command::Email { to, subject, body } => notifier.send_email(to, subject, body).await,
    }
}
