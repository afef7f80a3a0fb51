use async_trait::async_trait;

/// Interface for an external completion service.
///
/// The router only needs a single call shape: system instruction plus one
/// user message in, completion text out. Which vendor sits behind it is
/// deliberately opaque.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request a single completion. Returns the raw (untrimmed) text.
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, anyhow::Error>;
}
