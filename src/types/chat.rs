//! Chat-flavored request envelopes: messages, assistants, suggestions.

use serde::{Deserialize, Serialize};

use super::common::Model;

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Sampling settings carried by an assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSettings {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Whether the assistant prefers streamed responses
    #[serde(default)]
    pub stream: bool,
}

/// An assistant configuration: the prompt plus an optional pinned model.
///
/// Operations that accept an assistant route by `model` when it is set and
/// fall back to the externally resolved default otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assistant {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(default)]
    pub settings: AssistantSettings,
}

impl Assistant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            prompt: String::new(),
            model: None,
            settings: AssistantSettings::default(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_settings(mut self, settings: AssistantSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// A follow-up suggestion produced for a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub content: String,
}

impl Suggestion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
