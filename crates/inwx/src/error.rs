//! Error type for the INWX adapter.
//!
//! Every failure aborts the operation that produced it; nothing is retried or
//! recovered locally. The variants map onto four classes:
//!
//! | Class | Variants |
//! |-------|----------|
//! | Transport | [`InwxError::Http`], [`InwxError::HttpStatus`] |
//! | Protocol | [`InwxError::Protocol`] |
//! | Translation | [`InwxError::InvalidRecordId`] |
//! | Serialisation | [`InwxError::Serialization`] |
//!
//! [`InwxError::Configuration`] is raised before any network activity.

use thiserror::Error;

/// Errors produced by the INWX adapter.
#[derive(Debug, Error)]
pub enum InwxError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a status outside `200..300`.
    #[error("{reason} ({status})")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase for `status` (empty if unknown).
        reason: String,
    },

    /// The RPC envelope was well-formed but reported a non-success code.
    ///
    /// INWX does not distinguish "already exists" or "not found" from other
    /// failures at this level; inspect `code` and `reason_code` for detail.
    #[error("{code}: {reason_code}")]
    Protocol {
        /// Provider status code (anything other than `1000`).
        code: i64,
        /// Machine-readable provider reason code; may be empty.
        reason_code: String,
        /// Human-readable provider message; may be empty.
        message: String,
    },

    /// A record identifier could not be parsed as a provider integer id.
    #[error("invalid record id '{id}': expected a decimal integer")]
    InvalidRecordId {
        /// The identifier as supplied by the caller.
        id: String,
    },

    /// A request body could not be encoded or a response body decoded.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Adapter configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl InwxError {
    /// Returns `true` for network failures and non-2xx HTTP responses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpStatus { .. })
    }

    /// Returns the provider status code for [`InwxError::Protocol`] errors.
    pub fn provider_code(&self) -> Option<i64> {
        match self {
            Self::Protocol { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InwxError>;
