use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use serde::Serialize;

use crate::workflows::connection::{ConnectionSettingsError, DbConnectionSettings};

pub const DEFAULT_E2E_BASE_URL: &str = "http://localhost:5173";

/// Every environment key consulted by [`AppConfig::from_lookup`].
pub const ENV_KEYS: [&str; 8] = [
    "APP_ENV",
    "APP_HOST",
    "APP_PORT",
    "APP_LOG_LEVEL",
    "DATABASE_URL",
    "SESSION_SECRET",
    "E2E_BASE_URL",
    "E2E_RETRIES",
];

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub database: Option<DbConnectionSettings>,
    pub session: SessionConfig,
    pub e2e: E2eConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an explicit key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment =
            AppEnvironment::from_str(&read("APP_ENV").unwrap_or_else(|| "development".to_string()));

        let host = read("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = read("APP_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = read("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let database = read("DATABASE_URL")
            .map(|url| DbConnectionSettings::from_url(&url))
            .transpose()
            .map_err(|source| ConfigError::InvalidDatabaseUrl { source })?;

        let e2e = E2eConfig {
            base_url: read("E2E_BASE_URL").unwrap_or_else(|| DEFAULT_E2E_BASE_URL.to_string()),
            retries: read("E2E_RETRIES")
                .map(|raw| raw.trim().parse::<u8>())
                .transpose()
                .map_err(|_| ConfigError::InvalidRetries)?
                .unwrap_or(0),
            ..E2eConfig::default()
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            database,
            session: SessionConfig {
                secret: read("SESSION_SECRET"),
            },
            e2e,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Session signing material.
#[derive(Clone, Default)]
pub struct SessionConfig {
    pub secret: Option<String>,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &self.secret.as_ref().map(|_| "****"))
            .finish()
    }
}

/// When the browser test runner records a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceCapture {
    Off,
    OnFirstRetry,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenshotCapture {
    Off,
    OnlyOnFailure,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoCapture {
    Off,
    RetainOnFailure,
    On,
}

/// Settings handed to the end-to-end browser runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct E2eConfig {
    pub base_url: String,
    pub retries: u8,
    pub trace: TraceCapture,
    pub screenshot: ScreenshotCapture,
    pub video: VideoCapture,
}

impl Default for E2eConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_E2E_BASE_URL.to_string(),
            retries: 0,
            trace: TraceCapture::OnFirstRetry,
            screenshot: ScreenshotCapture::OnlyOnFailure,
            video: VideoCapture::RetainOnFailure,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidRetries,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDatabaseUrl { source: ConnectionSettingsError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidRetries => write!(f, "E2E_RETRIES must be a valid u8"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDatabaseUrl { source } => {
                write!(f, "DATABASE_URL is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidRetries => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidDatabaseUrl { source } => Some(source),
        }
    }
}
