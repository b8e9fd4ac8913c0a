//! Error alert sink.
//!
//! [`ErrorAlertLayer`] captures error-level events and hands them to an
//! [`AlertDispatcher`] over an unbounded channel. The dispatcher runs as a background
//! task and POSTs each alert as JSON to the configured webhook.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing::{
    self,
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use serde::Serialize;
use std::{collections::BTreeMap, fmt};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::Context, Layer};

pub const ALERT_SUBJECT: &str = "Brainstorm Sessions Error Alert";

/// A single error event, as delivered to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct AlertEvent {
    pub subject: &'static str,
    pub target: String,
    pub message: String,
    pub fields: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

/// Tracing layer forwarding error-level events to an [`AlertDispatcher`].
pub struct ErrorAlertLayer {
    sender: mpsc::UnboundedSender<AlertEvent>,
}

/// Background task delivering captured alerts to the webhook.
pub struct AlertDispatcher {
    receiver: mpsc::UnboundedReceiver<AlertEvent>,
    webhook_url: String,
}

/// Creates a connected layer and dispatcher pair.
pub fn channel(webhook_url: String) -> (ErrorAlertLayer, AlertDispatcher) {
    let (sender, receiver) = mpsc::unbounded_channel();

    (
        ErrorAlertLayer { sender },
        AlertDispatcher {
            receiver,
            webhook_url,
        },
    )
}

impl<S> Layer<S> for ErrorAlertLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // Delivery failures are logged from this module; never alert on them.
        if *metadata.level() != Level::ERROR || metadata.target() == module_path!() {
            return;
        }

        let mut visitor = AlertVisitor::default();
        event.record(&mut visitor);

        let alert = AlertEvent {
            subject: ALERT_SUBJECT,
            target: metadata.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
            timestamp: Utc::now(),
        };

        // Receiver gone means the dispatcher stopped; drop the alert.
        let _ = self.sender.send(alert);
    }
}

impl AlertDispatcher {
    /// Delivers alerts until every [`ErrorAlertLayer`] has been dropped.
    pub async fn run(mut self, client: reqwest::Client) {
        while let Some(alert) = self.receiver.recv().await {
            let result = client
                .post(&self.webhook_url)
                .json(&alert)
                .send()
                .await
                .and_then(|response| response.error_for_status());

            if let Err(err) = result {
                tracing::warn!(error = %err, "Failed to deliver error alert");
            }
        }
    }
}

/// Collects an event's message and remaining fields as strings.
#[derive(Default)]
pub(super) struct AlertVisitor {
    pub(super) message: String,
    pub(super) fields: BTreeMap<String, String>,
}

impl Visit for AlertVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{:?}", value));
        }
    }
}
