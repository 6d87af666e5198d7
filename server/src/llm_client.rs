use async_trait::async_trait;
use mindchat_core::client::GeminiClient;
use mindchat_core::errors::GeminiResult;
use tracing::{debug, warn};

/// Prefix of a bot reply that stands in for a failed generation
pub const ERROR_REPLY_PREFIX: &str = "Error: ";

/// Produces the bot's reply to a user message.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Calls the model and reports failures as typed errors
    async fn try_generate(&self, prompt: &str) -> GeminiResult<String>;

    /// Reply text for the chat. Never fails: an error becomes `"Error: <description>"`.
    async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "Response generation failed");
                format!("{}{}", ERROR_REPLY_PREFIX, e)
            }
        }
    }
}

#[async_trait]
impl ResponseGenerator for GeminiClient {
    async fn try_generate(&self, prompt: &str) -> GeminiResult<String> {
        debug!(model = %self.model_name(), prompt_len = prompt.len(), "Generating reply");
        self.chat(prompt).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use mindchat_core::errors::GeminiError;

    /// Replies with fixed text, padded to check trimming
    pub struct CannedGenerator(pub &'static str);

    #[async_trait]
    impl ResponseGenerator for CannedGenerator {
        async fn try_generate(&self, _prompt: &str) -> GeminiResult<String> {
            Ok(format!("  {}\n", self.0))
        }
    }

    /// Takes a while to answer, like a real model call
    pub struct SlowGenerator(pub std::time::Duration);

    #[async_trait]
    impl ResponseGenerator for SlowGenerator {
        async fn try_generate(&self, prompt: &str) -> GeminiResult<String> {
            tokio::time::sleep(self.0).await;
            Ok(format!("heard: {prompt}"))
        }
    }

    /// Always fails like an exhausted quota
    pub struct FailingGenerator;

    #[async_trait]
    impl ResponseGenerator for FailingGenerator {
        async fn try_generate(&self, _prompt: &str) -> GeminiResult<String> {
            Err(GeminiError::HttpError {
                status_code: 429,
                message: "quota exceeded".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let reply = CannedGenerator("Hello! How are you?").generate("hi").await;
        assert_eq!(reply, "Hello! How are you?");
    }

    #[tokio::test]
    async fn test_failure_becomes_error_text() {
        let reply = FailingGenerator.generate("hi").await;
        assert_eq!(reply, "Error: HTTP Error: 429 - quota exceeded");
        assert!(reply.starts_with(ERROR_REPLY_PREFIX));
    }

    #[tokio::test]
    async fn test_typed_error_still_available() {
        assert!(FailingGenerator.try_generate("hi").await.is_err());
    }
}
