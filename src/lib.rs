//! # Aihub - Model-Aware Provider Dispatch
//!
//! Aihub is a dispatch facade for multi-vendor AI hubs: one uniform API
//! surface in front of a fixed set of vendor backends (Anthropic-style,
//! Gemini-style, OpenAI-style, and a generic OpenAI-compatible fallback).
//! Every request names a logical model, and the facade routes it to the
//! backend that can serve it.
//!
#![deny(unsafe_code)]
//!
//! ## Design
//!
//! - **Uniform Contract**: every backend (and the facade itself) implements
//!   the [`LlmBackend`](traits::LlmBackend) trait with identical
//!   success/error shapes, so routing stays invisible to callers.
//! - **Closed Registry**: the vendor set is fixed, keyed by a closed enum
//!   and built once from a single hub configuration; no runtime mutation,
//!   no synchronization on the hot path.
//! - **Auditable Policy**: per-operation routing exceptions live in one
//!   policy table, and the model cascade is a pure function.
//! - **No Reinterpretation**: backend errors propagate unchanged; the one
//!   exception is the `check` probe, which captures faults into its result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aihub::prelude::*;
//!
//! # fn wire_backends() -> Arc<dyn BackendFactory> { unimplemented!() }
//! # fn main() -> Result<(), ProviderError> {
//! let hub = AiHub::builder()
//!     .config(ProviderConfig::new("hub", "your-api-key", "https://hub.example.com"))
//!     .factory(wire_backends())
//!     .default_model(Arc::new(StaticDefaultModel(Model::new("gpt-4o-mini"))))
//!     .build()?;
//!
//! assert_eq!(hub.select(&Model::new("claude-3-5-sonnet")), BackendKind::Anthropic);
//! # Ok(())
//! # }
//! ```

/// Error types shared by the facade and all backends
pub mod error;

/// Centralized default values (routing markers, HTTP defaults)
pub mod defaults;

/// Core data model
pub mod types;

/// Uniform backend contract and collaborator traits
pub mod traits;

/// Default model classification heuristics
pub mod classify;

/// Closed-enum backend registry and factory
pub mod registry;

/// Routing policy: model cascade and per-operation table
pub mod routing;

/// The dispatch facade
pub mod provider;

/// Shared utilities (HTTP client construction)
pub mod utils;

pub use error::ProviderError;
pub use provider::{AiHub, AiHubBuilder, ModelSource};

/// Common imports for working with the dispatch facade.
pub mod prelude {
    pub use crate::classify::DefaultModelClassifier;
    pub use crate::error::ProviderError;
    pub use crate::provider::{AiHub, AiHubBuilder, ModelSource};
    pub use crate::registry::{BackendFactory, BackendKind, BackendRegistry};
    pub use crate::routing::{Operation, RoutePolicy};
    pub use crate::traits::{
        DefaultModelResolver, LlmBackend, ModelClassifier, StaticDefaultModel,
    };
    pub use crate::types::{
        Assistant, AssistantSettings, CheckResult, ChunkCallback, CompletionChunk,
        CompletionsParams, HttpConfig, ImageGenerationParams, Message, Model, ModelInfo,
        PartialTextCallback, ProviderConfig, Role, Suggestion,
    };
}
