pub mod prompt;
pub mod router;
pub mod short_words;

pub use router::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Incoming translation request. Absent fields deserialize as empty so
/// the router can classify them itself instead of failing in extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub target_language: String,
}

/// Outcome of a routed translation. Short-circuit paths set exactly one
/// flag; the model-backed path sets none and echoes the request fields.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub needs_more_text: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_short_text: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("missing parameters")]
    MissingParameters,
    /// The provider answered but produced no usable text.
    #[error("empty translation result")]
    UpstreamEmpty,
    /// Transport or provider failure. The detail is logged, never sent
    /// to the caller.
    #[error("upstream translation failure")]
    Upstream(#[from] anyhow::Error),
}
