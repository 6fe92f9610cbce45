//! Default Configuration Values
//!
//! Centralizes the constants used throughout the crate so routing markers,
//! vendor paths, and HTTP defaults are maintained in one place.

use std::time::Duration;

/// Routing configuration
pub mod routing {
    /// Model-id substring that routes to the Anthropic-style backend
    pub const CLAUDE_MARKER: &str = "claude";

    /// Model-id substring that routes to the Gemini-style backend
    pub const GEMINI_MARKER: &str = "gemini";

    /// Path segment appended to the hub host to reach the Gemini surface.
    ///
    /// Aggregation hubs expose Gemini's wire protocol under a dedicated
    /// path while sharing credentials with the rest of the hub.
    pub const GEMINI_PATH: &str = "/gemini";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    ///
    /// Set to 60 seconds to accommodate large language models that may take
    /// 10-20 seconds to respond, plus network latency and proxy delays.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("aihub/", env!("CARGO_PKG_VERSION"));
}
