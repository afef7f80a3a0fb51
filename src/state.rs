use std::sync::Arc;

use crate::config::Config;
use crate::provider::{CompletionProvider, OpenAICompatibleProvider};
use crate::quality::{HeuristicScorer, QualityScorer};
use crate::translate::TranslationRouter;

/// Shared per-request context. Everything inside is immutable after
/// startup; requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub router: Arc<TranslationRouter>,
    pub scorer: Arc<dyn QualityScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider_config = &config.provider_config;
        let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAICompatibleProvider::new(
            provider_config.base_url.clone(),
            provider_config.model.clone(),
            provider_config.resolved_api_key(),
        ));
        let router = Arc::new(TranslationRouter::new(
            provider,
            provider_config.temperature,
            provider_config.max_output_tokens,
        ));

        Self {
            config,
            router,
            scorer: Arc::new(HeuristicScorer),
        }
    }
}
