//! Default model classification heuristics.
//!
//! The dispatcher consults a `ModelClassifier` to decide whether an
//! otherwise-unmatched model id is an OpenAI-style LLM. This module ships a
//! keyword-based default so the crate works without a host application;
//! callers with richer model metadata inject their own classifier.

use crate::traits::ModelClassifier;
use crate::types::Model;

/// Id fragments naming OpenAI surfaces that are not LLMs.
const NON_LLM_MARKERS: &[&str] = &["embedding", "whisper", "tts", "dall-e", "moderation"];

/// Keyword-based `ModelClassifier`.
///
/// Matches the GPT families plus the `oN` reasoning series, while rejecting
/// embedding/audio/image surfaces that share the vendor's namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultModelClassifier;

impl ModelClassifier for DefaultModelClassifier {
    fn is_openai_llm(&self, model: &Model) -> bool {
        let id = model.id.to_lowercase();

        if NON_LLM_MARKERS.iter().any(|marker| id.contains(marker)) {
            return false;
        }

        id.contains("gpt") || is_reasoning_series(&id)
    }
}

/// `o1`, `o3-mini`, `o4-mini-high`: a leading `o` plus digits, optionally
/// followed by a dash-separated variant suffix.
fn is_reasoning_series(id: &str) -> bool {
    let family = id.split('-').next().unwrap_or(id);
    let Some(rest) = family.strip_prefix('o') else {
        return false;
    };
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
}
