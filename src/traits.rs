//! Core Trait Definitions
//!
//! `LlmBackend` is the uniform contract every vendor backend implements, and
//! the dispatch facade implements it too, so a facade and a single backend
//! are interchangeable from the caller's side. The collaborator traits at
//! the bottom are the two external decision points routing depends on.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{
    Assistant, CheckResult, CompletionsParams, ImageGenerationParams, Message, Model, ModelInfo,
    PartialTextCallback, Suggestion,
};

/// The uniform backend contract.
///
/// Every operation keeps the same success/error shape across backends even
/// though the wire protocols differ; that uniformity is what makes routing
/// transparent to callers. Implementations surface failures as
/// `ProviderError` and never remap them.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Provider tag used in logs and error messages.
    fn name(&self) -> &str;

    /// List the models available on this backend.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;

    /// Generate a single text result from a prompt over some content.
    async fn generate_text(&self, prompt: &str, content: &str) -> Result<String, ProviderError>;

    /// Generate images, returning artifact URLs or encoded payloads.
    async fn generate_image(
        &self,
        params: &ImageGenerationParams,
    ) -> Result<Vec<String>, ProviderError>;

    /// Generate images through a chat exchange, streaming results into the
    /// conversation carried by `params`.
    async fn generate_image_by_chat(&self, params: CompletionsParams) -> Result<(), ProviderError>;

    /// Run a streamed completion; output is delivered via `params.on_chunk`.
    async fn completions(&self, params: CompletionsParams) -> Result<(), ProviderError>;

    /// Translate `content` with the assistant's prompt. `on_partial`
    /// receives incremental text with a completion flag.
    async fn translate(
        &self,
        content: &str,
        assistant: &Assistant,
        on_partial: Option<PartialTextCallback>,
    ) -> Result<String, ProviderError>;

    /// Summarize a conversation.
    async fn summaries(
        &self,
        messages: &[Message],
        assistant: &Assistant,
    ) -> Result<String, ProviderError>;

    /// Summarize a conversation into a search query. `Ok(None)` is the
    /// explicit no-summary result and is not an error.
    async fn summary_for_search(
        &self,
        messages: &[Message],
        assistant: &Assistant,
    ) -> Result<Option<String>, ProviderError>;

    /// Produce follow-up suggestions for a conversation.
    async fn suggestions(
        &self,
        messages: &[Message],
        assistant: &Assistant,
    ) -> Result<Vec<Suggestion>, ProviderError>;

    /// Probe whether `model` is usable on this backend. Never fails:
    /// backend faults are captured into the result.
    async fn check(&self, model: &Model, stream: bool) -> CheckResult;

    /// Embedding dimension count for `model`.
    async fn get_embedding_dimensions(&self, model: &Model) -> Result<u32, ProviderError>;
}

/// External predicate classifying a model id as an OpenAI-style LLM.
///
/// Consulted during routing only after the vendor substring checks miss.
pub trait ModelClassifier: Send + Sync {
    fn is_openai_llm(&self, model: &Model) -> bool;
}

/// External lookup supplying the model to use when an assistant has none.
pub trait DefaultModelResolver: Send + Sync {
    fn default_model(&self) -> Model;
}

/// A `DefaultModelResolver` that always returns one fixed model.
#[derive(Debug, Clone)]
pub struct StaticDefaultModel(pub Model);

impl DefaultModelResolver for StaticDefaultModel {
    fn default_model(&self) -> Model {
        self.0.clone()
    }
}
