use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `LOG_LEVEL` is not a valid tracing filter directive.
    #[error("Invalid log level '{value}': {reason}")]
    InvalidLogLevel { value: String, reason: String },

    /// The rolling log file could not be created in `LOG_DIR`.
    #[error("Failed to open log directory '{path}': {reason}")]
    LogDirectory { path: String, reason: String },

    /// A global tracing subscriber was already installed.
    #[error("Failed to install logger: {0}")]
    LoggerInstall(String),
}
