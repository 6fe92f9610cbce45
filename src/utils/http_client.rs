//! HTTP client construction
//!
//! Backends derive their `reqwest::Client` from the hub configuration
//! through this one helper so timeout, proxy, and header handling stay
//! consistent across vendors.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ProviderError;
use crate::types::ProviderConfig;

/// Build an HTTP client for one backend from its derived `ProviderConfig`.
///
/// Hub-level extra headers are applied on top of the generic HTTP headers,
/// so a per-request override in `extra_headers` wins over the shared
/// `HttpConfig` entry of the same name.
pub fn build_http_client(config: &ProviderConfig) -> Result<reqwest::Client, ProviderError> {
    let http = &config.http;
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = http.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = http.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &http.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ProviderError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &http.user_agent {
        builder = builder.user_agent(user_agent);
    }

    let headers = merged_headers(config)?;
    if !headers.is_empty() {
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| ProviderError::HttpError(format!("Failed to create HTTP client: {e}")))
}

fn merged_headers(config: &ProviderConfig) -> Result<HeaderMap, ProviderError> {
    let mut headers = HeaderMap::new();
    for (k, v) in config.http.headers.iter().chain(&config.extra_headers) {
        let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
            ProviderError::ConfigurationError(format!("Invalid header name '{k}': {e}"))
        })?;
        let value = HeaderValue::from_str(v).map_err(|e| {
            ProviderError::ConfigurationError(format!("Invalid header value for '{k}': {e}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}
