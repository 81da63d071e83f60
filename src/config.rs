use crate::payload::Payload;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// Notification stub configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "notification-stub")]
#[command(about = "Send reports, trade alerts, chat messages and emails through the notification facade")]
pub struct Config {
    /// Notifier backend: stub or live
    #[arg(long, env = "NOTIFY_MODE", default_value = "stub")]
    pub mode: Mode,

    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors)
        let _ = dotenvy::dotenv();

        let config = Config::try_parse().context("Failed to parse configuration")?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Mode::Live = self.mode {
            anyhow::bail!("NOTIFY_MODE=live requires delivery transports, none are configured");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Mode {
    Stub,
    Live,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Stub => "stub",
            Mode::Live => "live",
        }
    }
}

/// One subcommand per notifier operation
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send the daily report
    DailyReport {
        /// Report contents as JSON
        #[arg(long, default_value = "{}")]
        payload: String,
    },
    /// Send a trade alert
    TradeAlert {
        /// Trade event as JSON
        #[arg(long, default_value = "{}")]
        payload: String,
    },
    /// Send a telegram message
    Telegram {
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Send an email
    Email {
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        body: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::DailyReport { .. } => "daily-report",
            Command::TradeAlert { .. } => "trade-alert",
            Command::Telegram { .. } => "telegram",
            Command::Email { .. } => "email",
        }
    }

    /// Parse the JSON payload of report and trade commands
    pub fn payload(&self) -> Result<Option<Payload>> {
        match self {
            Command::DailyReport { payload } | Command::TradeAlert { payload } => {
                let parsed = Payload::parse(payload)
                    .with_context(|| format!("Invalid --payload for {}", self.name()))?;
                Ok(Some(parsed))
            }
            Command::Telegram { .. } | Command::Email { .. } => Ok(None),
        }
    }
}
