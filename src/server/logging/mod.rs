//! Log sink wiring for the server process.
//!
//! Installs a global tracing subscriber with three sinks:
//!
//! - **Console** - human-readable output on stdout
//! - **Rolling file** - one file per day in the configured log directory
//! - **Error alerts** - optional; error-level events are forwarded to a webhook by
//!   [`alert::AlertDispatcher`]
//!
//! The file sink writes synchronously so that every event is on disk once the
//! logging macro returns and nothing is lost when the process exits.

pub mod alert;
#[cfg(test)]
pub mod capture;

use dioxus_logger::tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::LogConfig, error::config::ConfigError};

use self::alert::{AlertDispatcher, ErrorAlertLayer};

pub const LOG_FILE_PREFIX: &str = "brainstorm";
pub const LOG_FILE_SUFFIX: &str = "log";

/// Installs the global subscriber described by `config`.
///
/// # Returns
/// - `Ok(Some(AlertDispatcher))` - Alerts are enabled; the dispatcher must be spawned
///   onto the runtime to deliver them
/// - `Ok(None)` - No alert webhook configured
/// - `Err(ConfigError)` - Invalid level, unusable log directory, or a subscriber was
///   already installed
pub fn init(config: &LogConfig) -> Result<Option<AlertDispatcher>, ConfigError> {
    let (subscriber, dispatcher) = build(config)?;

    subscriber
        .try_init()
        .map_err(|e| ConfigError::LoggerInstall(e.to_string()))?;

    Ok(dispatcher)
}

/// Builds the subscriber with every configured sink without installing it.
pub fn build(
    config: &LogConfig,
) -> Result<(impl Subscriber + Send + Sync + 'static, Option<AlertDispatcher>), ConfigError> {
    let filter = EnvFilter::try_new(&config.level).map_err(|e| ConfigError::InvalidLogLevel {
        value: config.level.clone(),
        reason: e.to_string(),
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(&config.directory)
        .map_err(|e| ConfigError::LogDirectory {
            path: config.directory.display().to_string(),
            reason: e.to_string(),
        })?;

    let (alert_layer, dispatcher) = match &config.alert_webhook_url {
        Some(url) => {
            let (layer, dispatcher) = alert::channel(url.clone());
            (Some(layer), Some(dispatcher))
        }
        None => (None::<ErrorAlertLayer>, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_appender))
        .with(alert_layer);

    Ok((subscriber, dispatcher))
}
