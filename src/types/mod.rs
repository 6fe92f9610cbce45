//! Core data model shared by the dispatch facade and every backend.

mod chat;
mod common;
mod models;
mod params;

pub use chat::{Assistant, AssistantSettings, Message, Role, Suggestion};
pub use common::{CheckResult, HttpConfig, Model, ProviderConfig};
pub use models::ModelInfo;
pub use params::{
    ChunkCallback, CompletionChunk, CompletionsParams, ImageGenerationParams, PartialTextCallback,
};
