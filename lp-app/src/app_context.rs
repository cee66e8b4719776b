use crate::application::GenerateLp;
use crate::config::AppConfig;
use crate::infrastructure::openai::{LlmProvider, OpenAiClient};
use crate::infrastructure::scraper::{PageFetcher, WebsiteScraper};
use lp_errors::AppError;
use std::sync::Arc;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub generate_lp: Arc<GenerateLp>,
}

impl AppContext {
    pub fn new(fetcher: Arc<dyn PageFetcher>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            generate_lp: Arc::new(GenerateLp::new(fetcher, llm)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let scraper = WebsiteScraper::new(config.scrape_timeout)?;
        let client = OpenAiClient::from_config(config);
        tracing::info!("Using chat completion model {}", client.model());

        Ok(Self::new(Arc::new(scraper), Arc::new(client)))
    }
}
