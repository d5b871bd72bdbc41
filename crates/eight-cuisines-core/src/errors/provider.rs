// ABOUTME: Structured error types for upstream recipe API and mirror requests
// ABOUTME: Classifies transport, status, timeout and decode failures with retry hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Failure talking to an upstream HTTP service (recipe API or mirror)
///
/// Every variant carries the name of the service so log lines and error
/// bodies say which dependency failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Connection refused, DNS failure, reset, or any other transport error
    #[error("{provider} request failed: {message}")]
    Network {
        /// Service name
        provider: String,
        /// Transport error text
        message: String,
    },

    /// The request did not complete within its deadline
    #[error("{provider} request timed out")]
    Timeout {
        /// Service name
        provider: String,
    },

    /// The service answered with a non-2xx status
    #[error("{provider} returned HTTP {status_code}")]
    HttpStatus {
        /// Service name
        provider: String,
        /// HTTP status code
        status_code: u16,
    },

    /// The body was not the JSON shape we expect
    #[error("{provider} returned an unreadable body: {message}")]
    Decode {
        /// Service name
        provider: String,
        /// Parser error text
        message: String,
    },
}

impl ProviderError {
    /// Create a network error
    #[must_use]
    pub fn network(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a status error
    #[must_use]
    pub fn http_status(provider: impl Into<String>, status_code: u16) -> Self {
        Self::HttpStatus {
            provider: provider.into(),
            status_code,
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Name of the service that failed
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Network { provider, .. }
            | Self::Timeout { provider }
            | Self::HttpStatus { provider, .. }
            | Self::Decode { provider, .. } => provider,
        }
    }

    /// Whether a caller-level retry could plausibly succeed
    ///
    /// Nothing in this crate retries; the hint is surfaced in error details.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status_code, .. } => *status_code >= 500 || *status_code == 429,
            Self::Decode { .. } => false,
        }
    }

    /// Classify a reqwest error
    #[cfg(feature = "provider-errors")]
    #[must_use]
    pub fn from_reqwest(provider: impl Into<String>, error: &reqwest::Error) -> Self {
        let provider = provider.into();
        if error.is_timeout() {
            Self::Timeout { provider }
        } else if error.is_decode() {
            Self::Decode {
                provider,
                message: error.to_string(),
            }
        } else if let Some(status) = error.status() {
            Self::HttpStatus {
                provider,
                status_code: status.as_u16(),
            }
        } else {
            Self::Network {
                provider,
                message: error.to_string(),
            }
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match error {
            ProviderError::Network { .. } | ProviderError::Timeout { .. } => {
                ErrorCode::ExternalServiceUnavailable
            }
            ProviderError::HttpStatus { .. } | ProviderError::Decode { .. } => {
                ErrorCode::ExternalServiceError
            }
        };
        let details = serde_json::json!({
            "provider": error.provider(),
            "retryable": error.is_retryable(),
        });
        let message = error.to_string();
        Self::new(code, message)
            .with_details(details)
            .with_source(error)
    }
}
