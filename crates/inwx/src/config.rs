//! Adapter configuration: account credentials and the RPC endpoint.
//!
//! Only the two credentials are required. The endpoint defaults to the INWX
//! production API; the sandbox ("OTE") endpoint and arbitrary URLs exist for
//! testing against non-production accounts.

use reqwest::Url;
use serde::Deserialize;

use crate::error::{InwxError, Result};

/// INWX production JSON-RPC endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://api.domrobot.com/jsonrpc/";

/// INWX sandbox (OTE) JSON-RPC endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://api.ote.domrobot.com/jsonrpc/";

const ENV_USERNAME: &str = "INWX_USERNAME";
const ENV_PASSWORD: &str = "INWX_PASSWORD";
const ENV_ENDPOINT: &str = "INWX_ENDPOINT";

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// The JSON-RPC endpoint every call is POSTed to.
///
/// Deserialises from `"production"`, `"sandbox"`, or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Endpoint {
    /// `https://api.domrobot.com/jsonrpc/`
    #[default]
    Production,
    /// `https://api.ote.domrobot.com/jsonrpc/`
    Sandbox,
    /// Any other endpoint URL.
    Custom(Url),
}

impl Endpoint {
    /// Returns the endpoint URL as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_ENDPOINT,
            Self::Sandbox => SANDBOX_ENDPOINT,
            Self::Custom(url) => url.as_str(),
        }
    }

    /// Returns the parsed endpoint URL.
    pub fn url(&self) -> Result<Url> {
        match self {
            Self::Custom(url) => Ok(url.clone()),
            other => Url::parse(other.as_str())
                .map_err(|e| InwxError::configuration(format!("invalid endpoint: {e}"))),
        }
    }
}

impl std::str::FromStr for Endpoint {
    type Err = InwxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "production" => Ok(Self::Production),
            "sandbox" | "ote" => Ok(Self::Sandbox),
            other => Url::parse(other)
                .map(Self::Custom)
                .map_err(|e| InwxError::configuration(format!("invalid endpoint '{other}': {e}"))),
        }
    }
}

impl TryFrom<String> for Endpoint {
    type Error = InwxError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for an [`crate::InwxProvider`].
#[derive(Clone, Deserialize)]
pub struct InwxConfig {
    /// INWX account username.
    pub auth_username: String,

    /// INWX account password.
    pub auth_password: String,

    /// RPC endpoint; production unless overridden.
    #[serde(default)]
    pub endpoint: Endpoint,
}

impl InwxConfig {
    /// Creates a production configuration for the given account.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            auth_username: username.into(),
            auth_password: password.into(),
            endpoint: Endpoint::Production,
        }
    }

    /// Returns this configuration pointed at `endpoint`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Reads `INWX_USERNAME`, `INWX_PASSWORD` and the optional `INWX_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let username = lookup(ENV_USERNAME)
            .ok_or_else(|| InwxError::configuration(format!("{ENV_USERNAME} is not set")))?;
        let password = lookup(ENV_PASSWORD)
            .ok_or_else(|| InwxError::configuration(format!("{ENV_PASSWORD} is not set")))?;
        let endpoint = match lookup(ENV_ENDPOINT) {
            Some(value) => value.parse()?,
            None => Endpoint::Production,
        };

        let config = Self::new(username, password).with_endpoint(endpoint);
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty credentials.
    pub fn validate(&self) -> Result<()> {
        if self.auth_username.is_empty() {
            return Err(InwxError::configuration("auth_username must not be empty"));
        }
        if self.auth_password.is_empty() {
            return Err(InwxError::configuration("auth_password must not be empty"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for InwxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InwxConfig")
            .field("auth_username", &self.auth_username)
            .field("auth_password", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
