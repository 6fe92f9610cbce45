//! Backend Registry
//!
//! The hub's vendor set is fixed at construction time, so the registry is
//! keyed by a closed enum rather than an open-ended lookup: one live backend
//! per `BackendKind`, built synchronously from a single `ProviderConfig`,
//! immutable afterward. The fallback slot is a plain struct field, so
//! resolution can never come up empty.

use std::sync::Arc;

use crate::defaults::routing::GEMINI_PATH;
use crate::error::ProviderError;
use crate::traits::LlmBackend;
use crate::types::ProviderConfig;

/// Registry key: one variant per vendor surface plus the designated
/// fallback (the generic OpenAI-compatible surface of the hub).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Anthropic,
    Gemini,
    OpenAi,
    Fallback,
}

impl BackendKind {
    /// All registry slots, in construction order.
    pub const ALL: [Self; 4] = [Self::Anthropic, Self::Gemini, Self::OpenAi, Self::Fallback];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Fallback => "openai-compatible",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates the live backend for one registry slot.
///
/// Wire-level implementations live outside this crate; the factory is how
/// they are plugged in. Creation is synchronous because the registry is
/// built inside the dispatcher constructor; clients needing async setup
/// should initialize lazily on first call.
pub trait BackendFactory: Send + Sync {
    fn create(
        &self,
        kind: BackendKind,
        config: ProviderConfig,
    ) -> Result<Arc<dyn LlmBackend>, ProviderError>;
}

/// Derive the configuration one backend is constructed with.
///
/// The Gemini surface is exposed under its own path on the hub host;
/// every other backend reuses the hub configuration verbatim.
pub fn backend_config(config: &ProviderConfig, kind: BackendKind) -> ProviderConfig {
    match kind {
        BackendKind::Gemini => {
            let host = format!("{}{}", config.api_host.trim_end_matches('/'), GEMINI_PATH);
            config.clone().with_api_host(host)
        }
        _ => config.clone(),
    }
}

/// Immutable mapping from `BackendKind` to a live backend.
pub struct BackendRegistry {
    anthropic: Arc<dyn LlmBackend>,
    gemini: Arc<dyn LlmBackend>,
    openai: Arc<dyn LlmBackend>,
    fallback: Arc<dyn LlmBackend>,
}

impl BackendRegistry {
    /// Build every slot from one hub configuration.
    pub fn from_config(
        config: &ProviderConfig,
        factory: &dyn BackendFactory,
    ) -> Result<Self, ProviderError> {
        let build = |kind: BackendKind| -> Result<Arc<dyn LlmBackend>, ProviderError> {
            let backend = factory.create(kind, backend_config(config, kind))?;
            tracing::debug!(backend = %kind, "registered hub backend");
            Ok(backend)
        };

        Ok(Self {
            anthropic: build(BackendKind::Anthropic)?,
            gemini: build(BackendKind::Gemini)?,
            openai: build(BackendKind::OpenAi)?,
            fallback: build(BackendKind::Fallback)?,
        })
    }

    pub fn get(&self, kind: BackendKind) -> &Arc<dyn LlmBackend> {
        match kind {
            BackendKind::Anthropic => &self.anthropic,
            BackendKind::Gemini => &self.gemini,
            BackendKind::OpenAi => &self.openai,
            BackendKind::Fallback => &self.fallback,
        }
    }

    /// The designated fallback backend.
    pub fn fallback(&self) -> &Arc<dyn LlmBackend> {
        &self.fallback
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("anthropic", &self.anthropic.name())
            .field("gemini", &self.gemini.name())
            .field("openai", &self.openai.name())
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
