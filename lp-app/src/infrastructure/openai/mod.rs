mod client;
mod prompt;
mod types;

pub use client::OpenAiClient;
pub use prompt::{
    build_initial_prompt, build_revision_prompt, build_summary_prompt, SUMMARY_INPUT_CHARS,
};

use async_trait::async_trait;
use lp_errors::AppError;

/// A chat-completion backend that answers a single user prompt with text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}
