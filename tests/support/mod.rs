//! Shared test doubles: call-recording backends and a factory that keeps
//! handles to everything it creates so tests can observe where calls landed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use aihub::prelude::*;

/// A backend that answers every operation with a payload tagged by its
/// registry slot, and counts the calls it receives.
pub struct MockBackend {
    kind: BackendKind,
    calls: AtomicU32,
    fail_check: bool,
}

impl MockBackend {
    pub fn new(kind: BackendKind, fail_check: bool) -> Self {
        Self {
            kind,
            calls: AtomicU32::new(0),
            fail_check,
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl LlmBackend for MockBackend {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        self.bump();
        Ok(vec![ModelInfo::new(format!("{}-catalog-model", self.name()))])
    }

    async fn generate_text(&self, _prompt: &str, _content: &str) -> Result<String, ProviderError> {
        self.bump();
        Ok(format!("text via {}", self.name()))
    }

    async fn generate_image(
        &self,
        _params: &ImageGenerationParams,
    ) -> Result<Vec<String>, ProviderError> {
        self.bump();
        Ok(vec![format!("https://images.test/{}.png", self.name())])
    }

    async fn generate_image_by_chat(&self, params: CompletionsParams) -> Result<(), ProviderError> {
        self.bump();
        if let Some(on_chunk) = &params.on_chunk {
            on_chunk(CompletionChunk::text(format!("image via {}", self.name())));
            on_chunk(CompletionChunk::finished());
        }
        Ok(())
    }

    async fn completions(&self, params: CompletionsParams) -> Result<(), ProviderError> {
        self.bump();
        if let Some(on_chunk) = &params.on_chunk {
            on_chunk(CompletionChunk::text(format!(
                "completion via {}",
                self.name()
            )));
            on_chunk(CompletionChunk::finished());
        }
        Ok(())
    }

    async fn translate(
        &self,
        content: &str,
        _assistant: &Assistant,
        on_partial: Option<PartialTextCallback>,
    ) -> Result<String, ProviderError> {
        self.bump();
        if let Some(on_partial) = on_partial {
            on_partial(content, false);
            on_partial(content, true);
        }
        Ok(format!("{} via {}", content, self.name()))
    }

    async fn summaries(
        &self,
        _messages: &[Message],
        _assistant: &Assistant,
    ) -> Result<String, ProviderError> {
        self.bump();
        Ok(format!("summary via {}", self.name()))
    }

    async fn summary_for_search(
        &self,
        messages: &[Message],
        _assistant: &Assistant,
    ) -> Result<Option<String>, ProviderError> {
        self.bump();
        if messages.is_empty() {
            Ok(None)
        } else {
            Ok(Some(format!("search via {}", self.name())))
        }
    }

    async fn suggestions(
        &self,
        _messages: &[Message],
        _assistant: &Assistant,
    ) -> Result<Vec<Suggestion>, ProviderError> {
        self.bump();
        Ok(vec![Suggestion::new(format!(
            "suggestion via {}",
            self.name()
        ))])
    }

    async fn check(&self, model: &Model, _stream: bool) -> CheckResult {
        self.bump();
        if self.fail_check {
            CheckResult::fail(ProviderError::api_error(
                401,
                format!("{} rejected {}", self.name(), model.id),
            ))
        } else {
            CheckResult::ok()
        }
    }

    async fn get_embedding_dimensions(&self, _model: &Model) -> Result<u32, ProviderError> {
        self.bump();
        Ok(match self.kind {
            BackendKind::Anthropic => 1024,
            BackendKind::Gemini => 768,
            BackendKind::OpenAi => 1536,
            BackendKind::Fallback => 512,
        })
    }
}

/// Factory that records the configuration each backend was created with
/// and keeps a handle to every created backend.
pub struct MockFactory {
    fail_check: bool,
    created: Mutex<Vec<(BackendKind, ProviderConfig)>>,
    backends: Mutex<Vec<(BackendKind, Arc<MockBackend>)>>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self {
            fail_check: false,
            created: Mutex::new(Vec::new()),
            backends: Mutex::new(Vec::new()),
        }
    }

    pub fn with_failing_checks() -> Self {
        Self {
            fail_check: true,
            ..Self::new()
        }
    }

    pub fn backend(&self, kind: BackendKind) -> Arc<MockBackend> {
        self.backends
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, b)| b.clone())
            .expect("backend was not created")
    }

    pub fn created_configs(&self) -> Vec<(BackendKind, ProviderConfig)> {
        self.created.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> u32 {
        self.backends
            .lock()
            .unwrap()
            .iter()
            .map(|(_, b)| b.calls())
            .sum()
    }
}

impl BackendFactory for MockFactory {
    fn create(
        &self,
        kind: BackendKind,
        config: ProviderConfig,
    ) -> Result<Arc<dyn LlmBackend>, ProviderError> {
        let backend = Arc::new(MockBackend::new(kind, self.fail_check));
        self.created.lock().unwrap().push((kind, config));
        self.backends.lock().unwrap().push((kind, backend.clone()));
        Ok(backend)
    }
}

/// Default-model resolver that counts how often it is consulted.
pub struct CountingResolver {
    model: Model,
    calls: AtomicU32,
}

impl CountingResolver {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DefaultModelResolver for CountingResolver {
    fn default_model(&self) -> Model {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.model.clone()
    }
}

pub fn hub_config() -> ProviderConfig {
    ProviderConfig::new("hub", "sk-test", "https://hub.example.com")
}

/// A hub wired to mock backends and a fixed default model.
pub fn test_hub(factory: Arc<MockFactory>) -> AiHub {
    AiHub::builder()
        .config(hub_config())
        .factory(factory)
        .default_model(Arc::new(StaticDefaultModel(Model::new("gpt-4o-mini"))))
        .build()
        .expect("hub construction should succeed")
}
