//! Hub Dispatch Facade
//!
//! `AiHub` owns the fixed backend registry and re-exposes every operation of
//! the uniform contract, resolving the target backend per call before
//! delegating. It performs no transformation of inputs or outputs: it is
//! routing plus delegation, and every side effect (network, streaming
//! callbacks) belongs to the chosen backend. Each call is stateless with
//! respect to prior calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::classify::DefaultModelClassifier;
use crate::error::ProviderError;
use crate::registry::{BackendFactory, BackendKind, BackendRegistry};
use crate::routing::{Operation, RoutePolicy, route_for_model};
use crate::traits::{DefaultModelResolver, LlmBackend, ModelClassifier};
use crate::types::{
    Assistant, CheckResult, CompletionsParams, ImageGenerationParams, Message, Model, ModelInfo,
    PartialTextCallback, ProviderConfig, Suggestion,
};

/// Where the effective model of an assistant-driven call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// The assistant carried its own model
    Assistant,
    /// The external default-model lookup supplied it
    Default,
}

/// The model-aware dispatch facade.
///
/// Holds one live backend per vendor surface plus the designated fallback,
/// all built from a single hub configuration. `AiHub` itself implements
/// [`LlmBackend`], so it can stand anywhere a single backend can.
pub struct AiHub {
    registry: BackendRegistry,
    classifier: Arc<dyn ModelClassifier>,
    default_model: Arc<dyn DefaultModelResolver>,
}

impl AiHub {
    /// Build the facade, constructing one backend per registry slot from
    /// the hub configuration.
    pub fn new(
        config: &ProviderConfig,
        factory: &dyn BackendFactory,
        classifier: Arc<dyn ModelClassifier>,
        default_model: Arc<dyn DefaultModelResolver>,
    ) -> Result<Self, ProviderError> {
        let registry = BackendRegistry::from_config(config, factory)?;
        Ok(Self {
            registry,
            classifier,
            default_model,
        })
    }

    /// Create a builder with the default classifier preinstalled.
    pub fn builder() -> AiHubBuilder {
        AiHubBuilder::new()
    }

    /// Backend key for a model, evaluated freshly on every call.
    pub fn select(&self, model: &Model) -> BackendKind {
        route_for_model(model, self.classifier.as_ref())
    }

    /// Effective model for an assistant-driven operation: the assistant's
    /// own model when set, the external default otherwise. The rule lives
    /// here once so every defaulting operation behaves identically.
    pub fn resolve_model(&self, assistant: &Assistant) -> (Model, ModelSource) {
        match &assistant.model {
            Some(model) => (model.clone(), ModelSource::Assistant),
            None => {
                let model = self.default_model.default_model();
                tracing::warn!(
                    assistant = %assistant.name,
                    model = %model,
                    "assistant has no model, routing by default model"
                );
                (model, ModelSource::Default)
            }
        }
    }

    /// Look up the backend for one call, honoring the per-operation policy.
    fn backend_for(&self, op: Operation, model: Option<&Model>) -> &Arc<dyn LlmBackend> {
        let kind = match (op.route_policy(), model) {
            (RoutePolicy::ByModel, Some(model)) => self.select(model),
            _ => BackendKind::Fallback,
        };
        tracing::debug!(
            operation = ?op,
            model = model.map_or("-", |m| m.id.as_str()),
            backend = %kind,
            "routing request"
        );
        self.registry.get(kind)
    }

    /// Resolve and route in one step for the defaulting operations.
    fn backend_for_assistant(&self, op: Operation, assistant: &Assistant) -> &Arc<dyn LlmBackend> {
        let (model, _source) = self.resolve_model(assistant);
        self.backend_for(op, Some(&model))
    }
}

impl std::fmt::Debug for AiHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiHub")
            .field("registry", &self.registry)
            .finish()
    }
}

#[async_trait]
impl LlmBackend for AiHub {
    fn name(&self) -> &str {
        "aihub"
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        self.backend_for(Operation::ListModels, None)
            .list_models()
            .await
    }

    async fn generate_text(&self, prompt: &str, content: &str) -> Result<String, ProviderError> {
        self.backend_for(Operation::GenerateText, None)
            .generate_text(prompt, content)
            .await
    }

    async fn generate_image(
        &self,
        params: &ImageGenerationParams,
    ) -> Result<Vec<String>, ProviderError> {
        self.backend_for(Operation::GenerateImage, None)
            .generate_image(params)
            .await
    }

    async fn generate_image_by_chat(&self, params: CompletionsParams) -> Result<(), ProviderError> {
        self.backend_for(Operation::GenerateImageByChat, None)
            .generate_image_by_chat(params)
            .await
    }

    async fn completions(&self, params: CompletionsParams) -> Result<(), ProviderError> {
        // Completions are never silently defaulted onto another model.
        let Some(model) = params.assistant.model.clone() else {
            return Err(ProviderError::ConfigurationError(
                "completions requires the assistant to carry a model".to_string(),
            ));
        };
        self.backend_for(Operation::Completions, Some(&model))
            .completions(params)
            .await
    }

    async fn translate(
        &self,
        content: &str,
        assistant: &Assistant,
        on_partial: Option<PartialTextCallback>,
    ) -> Result<String, ProviderError> {
        self.backend_for_assistant(Operation::Translate, assistant)
            .translate(content, assistant, on_partial)
            .await
    }

    async fn summaries(
        &self,
        messages: &[Message],
        assistant: &Assistant,
    ) -> Result<String, ProviderError> {
        self.backend_for_assistant(Operation::Summaries, assistant)
            .summaries(messages, assistant)
            .await
    }

    async fn summary_for_search(
        &self,
        messages: &[Message],
        assistant: &Assistant,
    ) -> Result<Option<String>, ProviderError> {
        self.backend_for_assistant(Operation::SummaryForSearch, assistant)
            .summary_for_search(messages, assistant)
            .await
    }

    async fn suggestions(
        &self,
        messages: &[Message],
        assistant: &Assistant,
    ) -> Result<Vec<Suggestion>, ProviderError> {
        self.backend_for_assistant(Operation::Suggestions, assistant)
            .suggestions(messages, assistant)
            .await
    }

    async fn check(&self, model: &Model, stream: bool) -> CheckResult {
        self.backend_for(Operation::Check, Some(model))
            .check(model, stream)
            .await
    }

    async fn get_embedding_dimensions(&self, model: &Model) -> Result<u32, ProviderError> {
        self.backend_for(Operation::EmbeddingDimensions, Some(model))
            .get_embedding_dimensions(model)
            .await
    }
}

/// Builder for [`AiHub`].
///
/// The classifier defaults to [`DefaultModelClassifier`]; configuration,
/// factory, and default-model resolver are required.
pub struct AiHubBuilder {
    config: Option<ProviderConfig>,
    factory: Option<Arc<dyn BackendFactory>>,
    classifier: Arc<dyn ModelClassifier>,
    default_model: Option<Arc<dyn DefaultModelResolver>>,
}

impl AiHubBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            factory: None,
            classifier: Arc::new(DefaultModelClassifier),
            default_model: None,
        }
    }

    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn factory(mut self, factory: Arc<dyn BackendFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn ModelClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn default_model(mut self, resolver: Arc<dyn DefaultModelResolver>) -> Self {
        self.default_model = Some(resolver);
        self
    }

    pub fn build(self) -> Result<AiHub, ProviderError> {
        let config = self.config.ok_or_else(|| {
            ProviderError::ConfigurationError("provider configuration is required".to_string())
        })?;
        let factory = self.factory.ok_or_else(|| {
            ProviderError::ConfigurationError("backend factory is required".to_string())
        })?;
        let default_model = self.default_model.ok_or_else(|| {
            ProviderError::ConfigurationError("default model resolver is required".to_string())
        })?;

        AiHub::new(&config, factory.as_ref(), self.classifier, default_model)
    }
}

impl Default for AiHubBuilder {
    fn default() -> Self {
        Self::new()
    }
}
