// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use anyhow::{anyhow, Context, Result};
use eight_cuisines_core::constants::{mirror, server, upstream};
use eight_cuisines_providers::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn, Level};
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Upstream recipe API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDbConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Area listed when a search names no ingredient
    pub pool_area: String,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: upstream::MEALDB_BASE_URL.to_owned(),
            pool_area: upstream::DEFAULT_POOL_AREA.to_owned(),
        }
    }
}

/// Backend mirror discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Candidate base URLs probed in order; empty means direct mode
    pub candidates: Vec<String>,
    /// Bound on a single health probe in milliseconds
    pub probe_timeout_ms: u64,
}

impl MirrorConfig {
    /// Probe bound as a `Duration`
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            probe_timeout_ms: mirror::DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

/// CORS settings for the mirror routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` or empty allows any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the mirror API listens on
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Bound on handling one inbound request, in seconds
    pub request_timeout_secs: u64,
    /// Outbound HTTP timeouts
    pub http_client: HttpClientConfig,
    /// Upstream recipe API
    pub mealdb: MealDbConfig,
    /// Mirror discovery
    pub mirror: MirrorConfig,
    /// CORS
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: server::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            request_timeout_secs: server::DEFAULT_REQUEST_TIMEOUT_SECS,
            http_client: HttpClientConfig::default(),
            mealdb: MealDbConfig::default(),
            mirror: MirrorConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let defaults = HttpClientConfig::default();
        let config = Self {
            http_port: env_var_or("HTTP_PORT", &server::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            request_timeout_secs: env_var_or(
                "REQUEST_TIMEOUT_SECS",
                &server::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            http_client: HttpClientConfig {
                timeout_secs: env_var_or("HTTP_TIMEOUT_SECS", &defaults.timeout_secs.to_string())
                    .parse()
                    .context("Invalid HTTP_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    "HTTP_CONNECT_TIMEOUT_SECS",
                    &defaults.connect_timeout_secs.to_string(),
                )
                .parse()
                .context("Invalid HTTP_CONNECT_TIMEOUT_SECS value")?,
            },
            mealdb: MealDbConfig {
                base_url: env_var_or("MEALDB_BASE_URL", upstream::MEALDB_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                pool_area: env_var_or("RECIPE_POOL_AREA", upstream::DEFAULT_POOL_AREA)
                    .trim()
                    .to_owned(),
            },
            mirror: MirrorConfig {
                candidates: parse_list(&env_var_or("MIRROR_CANDIDATES", "")),
                probe_timeout_ms: env_var_or(
                    "MIRROR_PROBE_TIMEOUT_MS",
                    &mirror::DEFAULT_PROBE_TIMEOUT_MS.to_string(),
                )
                .parse()
                .context("Invalid MIRROR_PROBE_TIMEOUT_MS value")?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error for unusable URLs, zero timeouts or an empty pool area
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.mealdb.base_url)
            .with_context(|| format!("Invalid MEALDB_BASE_URL: {}", self.mealdb.base_url))?;

        for candidate in &self.mirror.candidates {
            Url::parse(candidate)
                .with_context(|| format!("Invalid mirror candidate URL: {candidate}"))?;
        }

        if self.mealdb.pool_area.is_empty() {
            return Err(anyhow!("RECIPE_POOL_AREA cannot be empty"));
        }

        if self.http_client.timeout_secs == 0 || self.http_client.connect_timeout_secs == 0 {
            return Err(anyhow!("HTTP client timeouts must be greater than zero"));
        }

        if self.mirror.probe_timeout_ms == 0 {
            return Err(anyhow!("MIRROR_PROBE_TIMEOUT_MS must be greater than zero"));
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow!("REQUEST_TIMEOUT_SECS must be greater than zero"));
        }

        if self.environment.is_production() && self.cors.allowed_origins.iter().any(|o| o == "*") {
            warn!("CORS allows any origin in production");
        }

        Ok(())
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Eight Cuisines Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Upstream: {}\n\
             - Pool Area: {}\n\
             - Mirror Candidates: {}\n\
             - Probe Timeout: {}ms\n\
             - HTTP Timeouts: {}s request, {}s connect\n\
             - CORS Origins: {}",
            self.http_port,
            self.environment,
            self.log_level,
            self.mealdb.base_url,
            self.mealdb.pool_area,
            if self.mirror.candidates.is_empty() {
                "none (direct mode)".to_owned()
            } else {
                self.mirror.candidates.join(", ")
            },
            self.mirror.probe_timeout_ms,
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
            self.cors.allowed_origins.join(", "),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a comma-separated list, dropping blanks
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        parse_list(origins_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list("http://a:8888/api, http://b:8888 ,"),
            vec!["http://a:8888/api", "http://b:8888"]
        );
        assert_eq!(parse_list(""), Vec::<String>::new());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000,https://app.example.com"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_tracing_level(), Level::WARN);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http_port, 8888);
        assert!(config.mirror.candidates.is_empty());
        assert_eq!(config.mirror.probe_timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn test_validation_rejects_relative_mirror() {
        let mut config = ServerConfig::default();
        config.mirror.candidates = vec!["/api".to_owned()];
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.mirror.probe_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_mentions_direct_mode() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("HTTP Port: 8888"));
        assert!(summary.contains("none (direct mode)"));
    }
}
