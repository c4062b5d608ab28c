//! Text generation: the `Generator` seam used by the server, and the Gemini client behind it.

mod error;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use futures::future::BoxFuture;
use serde_json::{Value, json};

use crate::core::config::Config;

pub use error::{ChatError, map_api_error};

/// Produces the raw (unformatted) reply text for a prompt.
pub trait Generator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ChatError>>;
}

/// Gemini through its OpenAI-compatible chat completions endpoint.
pub struct GeminiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::with_config(config.openai_config.clone()),
            model: config.model_id.clone(),
        }
    }

    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        log::debug!("Calling {} ({} prompt bytes)", self.model, prompt.len());
        let response = self
            .client
            .chat()
            .create_byot::<_, Value>(json!({
                "model": self.model,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .await
            .map_err(map_api_error)?;
        reply_text(&response)
    }
}

impl Generator for GeminiGenerator {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ChatError>> {
        Box::pin(self.complete(prompt))
    }
}

/// Extract the first choice's text from a chat completion response.
pub(crate) fn reply_text(response: &Value) -> Result<String, ChatError> {
    if let Some(err) = response.get("error") {
        let msg = err
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error");
        return Err(ChatError::ApiMessage(msg.to_string()));
    }
    let text = response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::trim)
        .unwrap_or("");
    if text.is_empty() {
        Err(ChatError::EmptyReply)
    } else {
        Ok(text.to_string())
    }
}
