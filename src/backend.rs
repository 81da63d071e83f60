//! Delivery capabilities for a live notifier
//!
//! No concrete transport ships with this crate. [`LiveNotifier`] wires whatever
//! implementations the application provides behind the [`Notifier`] facade.

use crate::notifier::Notifier;
use crate::payload::{ReportPayload, TradeNotification};
use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

/// Failures a delivery collaborator can report
#[allow(dead_code)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },
}

/// Delivers email
#[allow(async_fn_in_trait)]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// Posts chat messages
#[allow(async_fn_in_trait)]
pub trait ChatTransport: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError>;
}

/// Publishes structured reports and trade alerts
#[allow(async_fn_in_trait)]
pub trait ReportSink: Send + Sync {
    async fn publish_report(&self, payload: &ReportPayload) -> Result<(), NotifyError>;

    async fn publish_trade(&self, notification: &TradeNotification) -> Result<(), NotifyError>;
}

/// Notifier backed by real delivery collaborators
#[allow(dead_code)]
pub struct LiveNotifier<M, C, R> {
    mail: M,
    chat: C,
    reports: R,
}

impl<M, C, R> LiveNotifier<M, C, R>
where
    M: MailTransport,
    C: ChatTransport,
    R: ReportSink,
{
    #[allow(dead_code)]
    pub fn new(mail: M, chat: C, reports: R) -> Self {
        Self {
            mail,
            chat,
            reports,
        }
    }
}

impl<M, C, R> Notifier for LiveNotifier<M, C, R>
where
    M: MailTransport,
    C: ChatTransport,
    R: ReportSink,
{
    async fn send_daily_report(&self, payload: &ReportPayload) -> Result<()> {
        debug!("Publishing daily report");
        self.reports
            .publish_report(payload)
            .await
            .context("Failed to send daily report")
    }

    async fn send_trade_alert(&self, notification: &TradeNotification) -> Result<()> {
        debug!("Publishing trade alert");
        self.reports
            .publish_trade(notification)
            .await
            .context("Failed to send trade alert")
    }

    async fn send_telegram_message(&self, text: &str) -> Result<()> {
        debug!(len = text.len(), "Sending chat message");
        self.chat
            .send_message(text)
            .await
            .context("Failed to send telegram message")
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        debug!(to = %to, "Delivering email");
        self.mail
            .deliver(to, subject, body)
            .await
            .with_context(|| format!("Failed to send email to {}", to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Payload;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Collaborator that records every call and answers with a fixed outcome
    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<String>>>,
        failure: Option<NotifyError>,
    }

    impl Recorder {
        fn failing(error: NotifyError) -> Self {
            Self {
                failure: Some(error),
                ..Self::default()
            }
        }

        fn record(&self, call: String) -> Result<(), NotifyError> {
            self.calls.lock().unwrap().push(call);
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MailTransport for Recorder {
        async fn deliver(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
            self.record(format!("mail {} | {} | {}", to, subject, body))
        }
    }

    impl ChatTransport for Recorder {
        async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
            self.record(format!("chat {}", text))
        }
    }

    impl ReportSink for Recorder {
        async fn publish_report(&self, payload: &ReportPayload) -> Result<(), NotifyError> {
            self.record(format!("report {}", payload))
        }

        async fn publish_trade(&self, notification: &TradeNotification) -> Result<(), NotifyError> {
            self.record(format!("trade {}", notification))
        }
    }

    #[tokio::test]
    async fn test_operations_reach_their_collaborator() {
        let mail = Recorder::default();
        let chat = Recorder::default();
        let reports = Recorder::default();
        let notifier = LiveNotifier::new(mail.clone(), chat.clone(), reports.clone());

        notifier
            .send_email("a@example.com", "Subject", "Body")
            .await
            .unwrap();
        notifier.send_telegram_message("hello").await.unwrap();
        notifier
            .send_daily_report(&Payload::from(json!({ "trades": 5 })))
            .await
            .unwrap();
        notifier
            .send_trade_alert(&Payload::from(json!({ "symbol": "SOL" })))
            .await
            .unwrap();

        assert_eq!(mail.calls(), vec!["mail a@example.com | Subject | Body"]);
        assert_eq!(chat.calls(), vec!["chat hello"]);
        assert_eq!(
            reports.calls(),
            vec![r#"report {"trades":5}"#, r#"trade {"symbol":"SOL"}"#]
        );
    }

    #[tokio::test]
    async fn test_collaborator_error_propagates() {
        let mail = Recorder::failing(NotifyError::Authentication("bad token".to_string()));
        let notifier = LiveNotifier::new(mail, Recorder::default(), Recorder::default());

        let err = notifier
            .send_email("a@example.com", "Subject", "Body")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("a@example.com"));
        assert_eq!(
            err.downcast_ref::<NotifyError>(),
            Some(&NotifyError::Authentication("bad token".to_string()))
        );
    }

    #[tokio::test]
    async fn test_rate_limit_is_not_retried() {
        let chat = Recorder::failing(NotifyError::RateLimited {
            retry_after_secs: 30,
        });
        let notifier = LiveNotifier::new(Recorder::default(), chat.clone(), Recorder::default());

        let err = notifier.send_telegram_message("hello").await.unwrap_err();

        assert_eq!(chat.calls().len(), 1);
        assert_eq!(
            err.root_cause().to_string(),
            "rate limited, retry after 30s"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NotifyError::Delivery("smtp closed".to_string()).to_string(),
            "delivery failed: smtp closed"
        );
        assert_eq!(
            NotifyError::Authentication("expired".to_string()).to_string(),
            "authentication failed: expired"
        );
    }
}
