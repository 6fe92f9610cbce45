//! Utility modules
//!
//! Shared helpers used by backends and the dispatch facade.

pub mod http_client;

pub use http_client::build_http_client;
