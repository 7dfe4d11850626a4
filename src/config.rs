//! Configuration loading and constants.
//!
//! Defines the wire strings clients depend on, the CORS header values for each
//! route group, and default server settings. `AppConfig` is the root
//! configuration struct; every field has a default so the service runs without
//! a configuration file.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Response Wire Text
// =============================================================================
// Existing clients match on these exact strings, so they must not be
// translated or reworded.

/// Message attached to a successful decode
pub const DECODE_SUCCESS_MESSAGE: &str = "Decodificado com sucesso";

/// Message attached to a successful encode
pub const ENCODE_SUCCESS_MESSAGE: &str = "Codificado com sucesso";

/// Plain-text body returned by the health endpoint
pub const HEALTH_STATUS: &str = "Servidor do decodificador binário está funcionando!";

/// Prefix for validation failure messages (400 responses)
pub const PROCESSING_ERROR_PREFIX: &str = "Erro ao processar: ";

/// Message for unsupported HTTP methods (405 responses)
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido";

/// Content type of every JSON response body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type of the health status body
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Request body field holding the binary input for decode
pub const DECODE_FIELD: &str = "binary";

/// Request body field holding the text input for encode
pub const ENCODE_FIELD: &str = "text";

// =============================================================================
// CORS Headers
// =============================================================================

/// Origin allowed on every route
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Methods advertised by the conversion routes
pub const CORS_CONVERT_METHODS: &str = "POST, OPTIONS";

/// Request headers accepted by the conversion routes
pub const CORS_CONVERT_HEADERS: &str = "Content-Type";

/// Methods advertised by the health route
pub const CORS_HEALTH_METHODS: &str = "POST, GET, OPTIONS, DELETE, PUT";

/// Request headers accepted by the health route
pub const CORS_HEALTH_HEADERS: &str = formatcp!("{}, Authorization", CORS_CONVERT_HEADERS);

/// Pre-flight cache duration for the health route, in seconds
pub const CORS_HEALTH_MAX_AGE_SECS: u32 = 3600;

pub const CORS_HEALTH_MAX_AGE: &str = formatcp!("{}", CORS_HEALTH_MAX_AGE_SECS);

// =============================================================================
// Defaults
// =============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Seconds to wait for in-flight requests during graceful shutdown
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "binary_decoder=info,tower_http=info";

/// Response header carrying the per-request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for in-flight requests on SIGTERM/SIGINT
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        LogFormat::Text
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
