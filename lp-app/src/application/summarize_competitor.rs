use crate::infrastructure::openai::{build_summary_prompt, LlmProvider};
use crate::infrastructure::scraper::PageFetcher;
use futures::future::join_all;
use lp_errors::AppError;
use std::sync::Arc;

/// Stands in for the competitor summary when no competitor was summarized.
pub const NO_COMPETITOR_INFO: &str = "（競合情報なし）";

pub struct CompetitorSummarizer {
    fetcher: Arc<dyn PageFetcher>,
    llm: Arc<dyn LlmProvider>,
}

impl CompetitorSummarizer {
    pub fn new(fetcher: Arc<dyn PageFetcher>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { fetcher, llm }
    }

    /// Summary of one competitor site. Failures come back as a placeholder, never as an error.
    pub async fn summarize(&self, url: &str) -> String {
        match self.try_summarize(url).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Competitor summary failed for {}: {}", url, e);
                format!("（競合サイトの取得・要約に失敗しました: {}）", e)
            }
        }
    }

    /// Summaries for all URLs, fetched concurrently and joined in input order.
    pub async fn summarize_all<'a, I>(&self, urls: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let summaries = join_all(urls.into_iter().map(|url| self.summarize(url))).await;

        if summaries.is_empty() {
            NO_COMPETITOR_INFO.to_string()
        } else {
            summaries.join("\n\n")
        }
    }

    async fn try_summarize(&self, url: &str) -> Result<String, AppError> {
        let page_text = self.fetcher.fetch_paragraph_text(url).await?;
        let prompt = build_summary_prompt(&page_text);
        let summary = self.llm.complete(&prompt).await?;
        Ok(summary.trim().to_string())
    }
}
