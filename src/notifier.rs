//! Notification facade and its logging stub
//!
//! Callers depend on [`Notifier`] only. [`LoggingNotifier`] writes a diagnostic
//! line per call and always succeeds; [`crate::backend::LiveNotifier`] delegates
//! to real transports once they exist.

use crate::payload::{ReportPayload, TradeNotification};
use anyhow::Result;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Trait for sending notifications
#[allow(async_fn_in_trait)]
pub trait Notifier: Send + Sync {
    /// Send the daily report
    async fn send_daily_report(&self, payload: &ReportPayload) -> Result<()>;

    /// Send an alert about a trade event
    async fn send_trade_alert(&self, notification: &TradeNotification) -> Result<()>;

    /// Send a chat message
    async fn send_telegram_message(&self, text: &str) -> Result<()>;

    /// Send an email
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

static INSTANCE: OnceLock<LoggingNotifier> = OnceLock::new();

/// Stub notifier that only logs what it was asked to send
#[derive(Debug)]
pub struct LoggingNotifier {
    _private: (),
}

impl LoggingNotifier {
    pub fn new() -> Self {
        warn!("Notifications running in stub mode: nothing will be delivered");
        Self { _private: () }
    }

    /// Shared process-wide instance, created on first access
    pub fn instance() -> &'static LoggingNotifier {
        INSTANCE.get_or_init(LoggingNotifier::new)
    }
}

impl Default for LoggingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for LoggingNotifier {
    async fn send_daily_report(&self, payload: &ReportPayload) -> Result<()> {
        info!(payload = %payload, "[stub] daily report");
        Ok(())
    }

    async fn send_trade_alert(&self, notification: &TradeNotification) -> Result<()> {
        info!(notification = %notification, "[stub] trade alert");
        Ok(())
    }

    async fn send_telegram_message(&self, text: &str) -> Result<()> {
        info!(text = %text, "[stub] telegram message");
        Ok(())
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(to = %to, subject = %subject, body = %body, "[stub] email");
        Ok(())
    }
}
