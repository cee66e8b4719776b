//! Deterministic stand-ins for the LLM and the competitor web pages.

use crate::infrastructure::openai::LlmProvider;
use crate::infrastructure::scraper::PageFetcher;
use async_trait::async_trait;
use lp_errors::AppError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted LLM.
///
/// A prompt containing a registered substring gets the matching response
/// (first registration wins). Otherwise the default response is used, and
/// without one the call fails. Every prompt is recorded.
pub struct StubLlm {
    responses: Vec<(String, String)>,
    failures: Vec<String>,
    default_response: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubLlm {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            failures: Vec::new(),
            default_response: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_default(response: &str) -> Self {
        let mut llm = Self::new();
        llm.default_response = Some(response.to_string());
        llm
    }

    pub fn with_responses(responses: Vec<(&str, &str)>) -> Self {
        responses
            .into_iter()
            .fold(Self::new(), |llm, (needle, response)| llm.respond_to(needle, response))
    }

    /// Fails every call.
    pub fn with_failure() -> Self {
        Self::new()
    }

    pub fn respond_to(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
        self
    }

    /// Fails any prompt containing `prompt_contains`, ahead of registered responses.
    pub fn fail_on(mut self, prompt_contains: &str) -> Self {
        self.failures.push(prompt_contains.to_string());
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for StubLlm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmProvider for StubLlm {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.failures.iter().any(|needle| prompt.contains(needle.as_str())) {
            return Err(AppError::LlmError("stubbed failure".to_string()));
        }

        self.responses
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| AppError::LlmError("no stubbed response".to_string()))
    }
}

/// Fixed page text per URL. Unknown URLs fail like an unreachable host.
pub struct StubFetcher {
    pages: HashMap<String, Result<String, AppError>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn with_page(mut self, url: &str, paragraph_text: &str) -> Self {
        self.pages
            .insert(url.to_string(), Ok(paragraph_text.to_string()));
        self
    }

    pub fn with_failure(mut self, url: &str, error: AppError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }
}

impl Default for StubFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_paragraph_text(&self, url: &str) -> Result<String, AppError> {
        self.pages.get(url).cloned().unwrap_or_else(|| {
            Err(AppError::ScrapingFailed(format!("no page stubbed for {}", url)))
        })
    }
}
