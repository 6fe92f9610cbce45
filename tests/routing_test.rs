//! Routing and delegation behavior of the dispatch facade.

mod support;

use std::sync::{Arc, Mutex};

use aihub::prelude::*;
use support::{MockFactory, test_hub};

fn assistant_with_model(id: &str) -> Assistant {
    Assistant::new("test-assistant").with_model(Model::new(id))
}

#[tokio::test]
async fn test_claude_models_route_to_anthropic() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory.clone());

    let summary = hub
        .summaries(&[], &assistant_with_model("claude-3-5-sonnet"))
        .await
        .unwrap();
    assert_eq!(summary, "summary via anthropic");

    let dims = hub
        .get_embedding_dimensions(&Model::new("CLAUDE-X"))
        .await
        .unwrap();
    assert_eq!(dims, 1024);
}

#[tokio::test]
async fn test_gemini_models_route_to_gemini() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory.clone());

    let translated = hub
        .translate("hola", &assistant_with_model("gemini-pro"), None)
        .await
        .unwrap();
    assert_eq!(translated, "hola via gemini");
}

#[tokio::test]
async fn test_openai_style_models_route_to_openai() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory.clone());

    let dims = hub
        .get_embedding_dimensions(&Model::new("gpt-4"))
        .await
        .unwrap();
    assert_eq!(dims, 1536);

    assert_eq!(hub.select(&Model::new("o3-mini")), BackendKind::OpenAi);
}

#[tokio::test]
async fn test_unmatched_models_route_to_fallback() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory.clone());

    let dims = hub
        .get_embedding_dimensions(&Model::new("llama-70b"))
        .await
        .unwrap();
    assert_eq!(dims, 512);
}

#[tokio::test]
async fn test_select_is_case_insensitive_and_idempotent() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory);

    for id in ["claude-3-x", "Claude-3-X", "CLAUDE-X"] {
        assert_eq!(hub.select(&Model::new(id)), BackendKind::Anthropic);
    }

    let model = Model::new("gemini-1.5-flash");
    assert_eq!(hub.select(&model), hub.select(&model));
}

#[tokio::test]
async fn test_catalog_operations_always_use_fallback() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory.clone());

    let models = hub.list_models().await.unwrap();
    assert_eq!(models[0].id, "openai-compatible-catalog-model");

    let text = hub.generate_text("prompt", "content").await.unwrap();
    assert_eq!(text, "text via openai-compatible");

    let images = hub
        .generate_image(&ImageGenerationParams::new("a rusty crab"))
        .await
        .unwrap();
    assert_eq!(images, vec!["https://images.test/openai-compatible.png"]);

    // Only the fallback backend was ever reached.
    assert_eq!(factory.backend(BackendKind::Fallback).calls(), 3);
    assert_eq!(factory.total_calls(), 3);
}

#[tokio::test]
async fn test_image_by_chat_uses_fallback_even_for_claude_assistant() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory.clone());

    let chunks: Arc<Mutex<Vec<CompletionChunk>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = chunks.clone();
    let params = CompletionsParams::new(assistant_with_model("claude-3-opus"), vec![])
        .with_chunk_callback(Arc::new(move |chunk| sink.lock().unwrap().push(chunk)));

    hub.generate_image_by_chat(params).await.unwrap();

    let chunks = chunks.lock().unwrap();
    assert_eq!(chunks[0].text, "image via openai-compatible");
    assert!(chunks.last().unwrap().done);
    assert_eq!(factory.backend(BackendKind::Anthropic).calls(), 0);
}

#[tokio::test]
async fn test_completions_route_by_params_model() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory.clone());

    let chunks: Arc<Mutex<Vec<CompletionChunk>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = chunks.clone();
    let params = CompletionsParams::new(
        assistant_with_model("claude-3-haiku"),
        vec![Message::user("hi")],
    )
    .with_chunk_callback(Arc::new(move |chunk| sink.lock().unwrap().push(chunk)));

    hub.completions(params).await.unwrap();

    assert_eq!(chunks.lock().unwrap()[0].text, "completion via anthropic");
    assert_eq!(factory.backend(BackendKind::Anthropic).calls(), 1);
}

#[tokio::test]
async fn test_translate_delivers_partials() {
    let factory = Arc::new(MockFactory::new());
    let hub = test_hub(factory);

    let partials: Arc<Mutex<Vec<(String, bool)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = partials.clone();
    let on_partial: PartialTextCallback = Arc::new(move |text, done| {
        sink.lock().unwrap().push((text.to_string(), done));
    });

    let result = hub
        .translate("bonjour", &assistant_with_model("gpt-4o"), Some(on_partial))
        .await
        .unwrap();

    assert_eq!(result, "bonjour via openai");
    let partials = partials.lock().unwrap();
    assert_eq!(partials.as_slice(), &[
        ("bonjour".to_string(), false),
        ("bonjour".to_string(), true)
    ]);
}

// A custom classifier widens what counts as OpenAI-style; the substring
// markers still win first.
#[tokio::test]
async fn test_custom_classifier_is_honored_after_markers() {
    struct EverythingIsOpenAi;

    impl ModelClassifier for EverythingIsOpenAi {
        fn is_openai_llm(&self, _model: &Model) -> bool {
            true
        }
    }

    let factory = Arc::new(MockFactory::new());
    let hub = AiHub::builder()
        .config(support::hub_config())
        .factory(factory)
        .classifier(Arc::new(EverythingIsOpenAi))
        .default_model(Arc::new(StaticDefaultModel(Model::new("gpt-4o-mini"))))
        .build()
        .unwrap();

    assert_eq!(hub.select(&Model::new("mystery-model")), BackendKind::OpenAi);
    assert_eq!(
        hub.select(&Model::new("claude-3-opus")),
        BackendKind::Anthropic
    );
}
