use std::sync::Arc;
use tracing::{debug, error, info};

use super::prompt::CURRENT_TEMPLATE;
use super::{short_words, TranslateError, TranslateRequest, TranslationResult};
use crate::provider::CompletionProvider;

/// Per-request decision layer in front of the completion provider.
///
/// Classifies each request into one of four paths; only the last one
/// actually spends a provider call. Stateless apart from the provider
/// handle and tuning knobs.
pub struct TranslationRouter {
    provider: Arc<dyn CompletionProvider>,
    temperature: f32,
    max_output_tokens: u32,
}

impl TranslationRouter {
    pub fn new(provider: Arc<dyn CompletionProvider>, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            provider,
            temperature,
            max_output_tokens,
        }
    }

    /// Route a request. First matching rule wins:
    /// missing fields, too-short echo, short-word table, identity
    /// short-circuit, then the model-backed default.
    pub async fn route(&self, request: &TranslateRequest) -> Result<TranslationResult, TranslateError> {
        if request.text.is_empty()
            || request.source_language.is_empty()
            || request.target_language.is_empty()
        {
            debug!("rejecting request with missing parameters");
            return Err(TranslateError::MissingParameters);
        }

        let trimmed = request.text.trim();
        let length = trimmed.chars().count();

        if length < 2 {
            debug!("text too short, echoing back unchanged");
            return Ok(TranslationResult {
                translated_text: request.text.clone(),
                message: Some("Text is too short, no translation performed".to_string()),
                needs_more_text: true,
                ..Default::default()
            });
        }

        if length <= 3 {
            debug!("short text, resolving from static table: {}", trimmed);
            let lowered = trimmed.to_lowercase();
            // A miss falls back to the untranslated fragment rather than
            // spending a provider call on a near-meaningless input.
            let translated = short_words::lookup(&lowered, &request.target_language)
                .map(str::to_string)
                .unwrap_or_else(|| trimmed.to_string());
            return Ok(TranslationResult {
                translated_text: translated,
                message: Some("Short text".to_string()),
                is_short_text: true,
                ..Default::default()
            });
        }

        if request.source_language == request.target_language {
            debug!("source and target language match, skipping translation");
            return Ok(TranslationResult {
                translated_text: request.text.clone(),
                message: Some("Source and target language are the same".to_string()),
                ..Default::default()
            });
        }

        let system = CURRENT_TEMPLATE.render_system(&request.source_language, &request.target_language);
        let user =
            CURRENT_TEMPLATE.render_user(&request.text, &request.source_language, &request.target_language);

        debug!(
            "requesting completion: {} -> {}",
            request.source_language, request.target_language
        );
        let completion = self
            .provider
            .complete(&system, &user, self.temperature, self.max_output_tokens)
            .await
            .map_err(|e| {
                error!("provider call failed: {:#}", e);
                TranslateError::Upstream(e)
            })?;

        let translated = completion.trim();
        if translated.is_empty() {
            error!("provider returned an empty translation");
            return Err(TranslateError::UpstreamEmpty);
        }

        info!(
            "translated {} chars: {} -> {}",
            length, request.source_language, request.target_language
        );
        Ok(TranslationResult {
            translated_text: translated.to_string(),
            source_language: Some(request.source_language.clone()),
            target_language: Some(request.target_language.clone()),
            original_text: Some(request.text.clone()),
            ..Default::default()
        })
    }
}
