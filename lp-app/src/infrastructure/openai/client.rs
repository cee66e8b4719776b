use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use super::LlmProvider;
use crate::config::AppConfig;
use async_trait::async_trait;
use lp_errors::AppError;

pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_api_url.clone(),
            config.model.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(&self.model, prompt.to_string());

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::LlmError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Chat completion error: {} - {}", status, body);
            return Err(AppError::LlmError(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::LlmError(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::LlmError("No response from AI".to_string()))
    }
}
