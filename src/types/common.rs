//! Common types: model identifiers, provider configuration, HTTP settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::defaults;
use crate::error::ProviderError;

/// A logical AI model.
///
/// The `id` is an opaque string supplied by callers; routing compares it
/// case-insensitively and enforces no uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model identifier used as the routing key
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Optional catalog group (e.g. a model family)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Model {
    /// Create a model whose display name equals its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            group: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Immutable description of how to reach a hub vendor.
///
/// One `ProviderConfig` seeds the whole backend registry; per-vendor
/// derivations (see `registry::backend_config`) replace individual fields
/// while reusing the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Stable identifier for this hub configuration
    pub id: String,
    /// API key shared by all derived backends
    pub api_key: String,
    /// Base endpoint of the hub
    pub api_host: String,
    /// Extra headers forwarded on every request
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl ProviderConfig {
    pub fn new(
        id: impl Into<String>,
        api_key: impl Into<String>,
        api_host: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            api_key: api_key.into(),
            api_host: api_host.into(),
            extra_headers: HashMap::new(),
            http: HttpConfig::default(),
        }
    }

    /// Replace the endpoint host, keeping credentials and HTTP settings.
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }
}

/// HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Custom headers
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Proxy settings
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(defaults::http::CONNECT_TIMEOUT),
            headers: HashMap::new(),
            proxy: None,
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
        }
    }
}

// Helper module for Duration serialization
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Outcome of a configuration health probe.
///
/// `check` reports backend faults here instead of returning an error, so
/// probing code never needs exception handling for expected failures.
#[derive(Debug)]
pub struct CheckResult {
    pub valid: bool,
    pub error: Option<ProviderError>,
}

impl CheckResult {
    /// A passing probe.
    pub const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing probe carrying the captured fault.
    pub const fn fail(error: ProviderError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }
}
