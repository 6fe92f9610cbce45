//! Operation parameter envelopes and streaming callbacks.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::chat::{Assistant, Message};

/// Incremental text delivery: `(delta, is_complete)`.
pub type PartialTextCallback = Arc<dyn Fn(&str, bool) + Send + Sync>;

/// Receives streamed completion output chunk by chunk.
pub type ChunkCallback = Arc<dyn Fn(CompletionChunk) + Send + Sync>;

/// One streamed piece of completion output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionChunk {
    /// Text delta for this chunk (empty on the final marker)
    pub text: String,
    /// Whether the stream has finished
    pub done: bool,
}

impl CompletionChunk {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    pub const fn finished() -> Self {
        Self {
            text: String::new(),
            done: true,
        }
    }
}

/// Parameters for a streamed completion call.
///
/// The assistant's model is the routing key and is required; completion
/// requests are never silently defaulted onto another model. Streamed
/// output is delivered through `on_chunk`; dropping the callback is the
/// caller's way of stopping consumption.
#[derive(Clone)]
pub struct CompletionsParams {
    pub assistant: Assistant,
    pub messages: Vec<Message>,
    pub on_chunk: Option<ChunkCallback>,
}

impl CompletionsParams {
    pub fn new(assistant: Assistant, messages: Vec<Message>) -> Self {
        Self {
            assistant,
            messages,
            on_chunk: None,
        }
    }

    pub fn with_chunk_callback(mut self, on_chunk: ChunkCallback) -> Self {
        self.on_chunk = Some(on_chunk);
        self
    }
}

impl std::fmt::Debug for CompletionsParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionsParams")
            .field("assistant", &self.assistant.name)
            .field("model", &self.assistant.model.as_ref().map(|m| &m.id))
            .field("messages", &self.messages.len())
            .field("has_chunk_callback", &self.on_chunk.is_some())
            .finish()
    }
}

/// Parameters for image generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageGenerationParams {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    /// Target size, e.g. `"1024x1024"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Number of images to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ImageGenerationParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}
