use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_LEVEL: &str = "debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub log: LogConfig,
}

/// Destinations and verbosity for the application log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory receiving the daily rolling log files.
    pub directory: PathBuf,
    /// `EnvFilter` directive, e.g. `debug` or `brainstorm=debug,sqlx=warn`.
    pub level: String,
    /// When set, error-level events are forwarded to this webhook.
    pub alert_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            log: LogConfig {
                directory: lookup("LOG_DIR")
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())
                    .into(),
                level: lookup("LOG_LEVEL")
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
                alert_webhook_url: lookup("ALERT_WEBHOOK_URL").filter(|value| !value.is_empty()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn applies_defaults_for_optional_variables() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log.directory, PathBuf::from("logs"));
        assert_eq!(config.log.level, "debug");
        assert!(config.log.alert_webhook_url.is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://brainstorm.db?mode=rwc"),
            ("LOG_DIR", "/var/log/brainstorm"),
            ("LOG_LEVEL", "info"),
            ("ALERT_WEBHOOK_URL", "https://alerts.example.com/hook"),
        ]))
        .unwrap();

        assert_eq!(config.log.directory, PathBuf::from("/var/log/brainstorm"));
        assert_eq!(config.log.level, "info");
        assert_eq!(
            config.log.alert_webhook_url.as_deref(),
            Some("https://alerts.example.com/hook")
        );
    }

    #[test]
    fn missing_database_url_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();

        assert!(matches!(
            err,
            AppError::ConfigErr(ConfigError::MissingEnvVar(ref name)) if name == "DATABASE_URL"
        ));
    }
}
