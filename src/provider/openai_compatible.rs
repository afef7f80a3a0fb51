use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::interface::CompletionProvider;

/// OpenAI-compatible chat completions client.
///
/// Works against any endpoint speaking the `/chat/completions` wire
/// format, which covers the hosted services this backend is pointed at.
pub struct OpenAICompatibleProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAICompatibleProvider {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        info!(
            "Initialized OpenAICompatibleProvider: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompatibleProvider {
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, anyhow::Error> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instruction.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
            temperature,
            max_tokens: max_output_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(text)
    }
}
