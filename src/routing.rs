//! Routing Policy
//!
//! Two layers decide where a call goes. A per-operation policy table marks
//! the operations that always use the fallback backend, and for everything
//! else a fixed marker/classifier cascade picks a backend from the model id.
//! Both are pure functions of their inputs; nothing here holds state.

use crate::defaults::routing::{CLAUDE_MARKER, GEMINI_MARKER};
use crate::registry::BackendKind;
use crate::traits::ModelClassifier;
use crate::types::Model;

/// The operations of the uniform contract, as routing subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListModels,
    GenerateText,
    GenerateImage,
    GenerateImageByChat,
    Completions,
    Translate,
    Summaries,
    SummaryForSearch,
    Suggestions,
    Check,
    EmbeddingDimensions,
}

/// How an operation selects its backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Route by the request's effective model
    ByModel,
    /// Always delegate to the fallback backend, ignoring any model
    AlwaysFallback,
}

impl Operation {
    /// The per-operation routing exceptions, kept in one auditable table.
    ///
    /// Model listing is fallback-only: the hub's model catalog is
    /// authoritative only on the generic surface. Text and image generation
    /// are fallback-only as a deliberate restriction: only the generic
    /// surface carries those capabilities on this hub.
    pub const fn route_policy(self) -> RoutePolicy {
        match self {
            Self::ListModels
            | Self::GenerateText
            | Self::GenerateImage
            | Self::GenerateImageByChat => RoutePolicy::AlwaysFallback,
            Self::Completions
            | Self::Translate
            | Self::Summaries
            | Self::SummaryForSearch
            | Self::Suggestions
            | Self::Check
            | Self::EmbeddingDimensions => RoutePolicy::ByModel,
        }
    }
}

/// Pick the backend for a model id.
///
/// Checks run in a fixed order with early return: vendor substrings first,
/// the classifier only if both miss, the fallback last. Id comparison is
/// case-insensitive.
pub fn route_for_model(model: &Model, classifier: &dyn ModelClassifier) -> BackendKind {
    let id = model.id.to_lowercase();

    if id.contains(CLAUDE_MARKER) {
        return BackendKind::Anthropic;
    }
    if id.contains(GEMINI_MARKER) {
        return BackendKind::Gemini;
    }
    if classifier.is_openai_llm(model) {
        return BackendKind::OpenAi;
    }

    BackendKind::Fallback
}
