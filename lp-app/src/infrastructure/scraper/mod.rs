mod website_scraper;

pub use website_scraper::{extract_paragraph_text, WebsiteScraper};

use async_trait::async_trait;
use lp_errors::AppError;

/// Source of competitor page text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Text of every `<p>` on the page, space-joined with whitespace runs collapsed.
    async fn fetch_paragraph_text(&self, url: &str) -> Result<String, AppError>;
}
