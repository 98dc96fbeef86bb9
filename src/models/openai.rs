use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::traits::Model;
use super::types::{ModelResponse, TokenUsage};
use crate::app::Config;
use crate::constants::HTTP_REQUEST_TIMEOUT_SECS;
use crate::utils::MentorError;

/// Mentor backend speaking the OpenAI chat-completions wire format.
/// The rendered prompt travels as a single user message; the first choice's
/// message content is the reply.
pub struct OpenAiModel {
    client: Client,
    base_url: String,
    model_name: String,
    temperature: f32,
    max_tokens: usize,
    api_key: String,
}

impl OpenAiModel {
    /// Create a backend from the loaded configuration. The API credential is
    /// read once, here, from the environment variable the configuration
    /// names; a missing credential is a startup failure.
    pub fn new(config: &Config) -> Result<Self, MentorError> {
        let api_key = std::env::var(&config.credentials.api_key_env).map_err(|_| {
            MentorError::Config(format!(
                "{} is not set; export your API credential before starting",
                config.credentials.api_key_env
            ))
        })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MentorError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.model.base_url.trim_end_matches('/').to_string(),
            model_name: config.model.name.clone(),
            temperature: config.model.temperature,
            max_tokens: config.model.max_tokens,
            api_key,
        })
    }
}

#[async_trait]
impl Model for OpenAiModel {
    async fn complete(&self, prompt: &str) -> Result<ModelResponse, MentorError> {
        let request_body = json!({
            "model": self.model_name,
            "messages": [{
                "role": "user",
                "content": prompt,
            }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(model = %self.model_name, prompt_chars = prompt.len(), "sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| MentorError::Upstream(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(MentorError::Upstream(format!("{status}: {error_text}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| MentorError::Upstream(format!("malformed completion response: {e}")))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| MentorError::Upstream("completion had no choices".to_string()))?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion received"
            );
        }

        Ok(ModelResponse {
            content: choice.message.content,
            usage: completion.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            model_name: self.model_name.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

// Response structures for the chat-completions wire format

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: usize,
    completion_tokens: usize,
    total_tokens: usize,
}
