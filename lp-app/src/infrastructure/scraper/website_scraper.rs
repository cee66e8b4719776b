use super::PageFetcher;
use async_trait::async_trait;
use lp_errors::AppError;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

pub struct WebsiteScraper {
    http_client: reqwest::Client,
}

impl WebsiteScraper {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    async fn fetch_html(&self, parsed_url: &Url) -> Result<String, AppError> {
        let response = self
            .http_client
            .get(parsed_url.as_str())
            .header("User-Agent", USER_AGENT)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "ja-JP,ja;q=0.9,en-US;q=0.8,en;q=0.7")
            .send()
            .await
            .map_err(map_request_error)?;

        // Error pages still carry text worth summarizing.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered HTTP {}, using body anyway", parsed_url, status);
        }

        response.text().await.map_err(map_request_error)
    }
}

#[async_trait]
impl PageFetcher for WebsiteScraper {
    async fn fetch_paragraph_text(&self, url: &str) -> Result<String, AppError> {
        let parsed_url = Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{}: {}", url, e)))?;

        let html = self.fetch_html(&parsed_url).await?;
        let text = extract_paragraph_text(&html);

        tracing::debug!("Scraped {} characters of paragraph text from {}", text.chars().count(), url);
        Ok(text)
    }
}

fn map_request_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout
    } else {
        AppError::ScrapingFailed(e.to_string())
    }
}

/// Joins the text of all `<p>` elements with spaces and collapses whitespace runs.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let joined = match Selector::parse("p") {
        Ok(selector) => document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect::<Vec<_>>()
            .join(" "),
        Err(_) => String::new(),
    };

    collapse_whitespace(&joined)
}

fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_only_paragraphs() {
        let html = r#"<html><head><title>Acme</title></head>
            <body><h1>Heading</h1><p>First   line</p><div>skip me</div><p>Second <b>bold</b></p></body></html>"#;

        assert_eq!(extract_paragraph_text(html), "First line Second bold");
    }

    #[test]
    fn test_collapses_newlines_and_ideographic_space() {
        let html = "<p>\n  安い\u{3000}\u{3000}早い\n</p><p>\t旨い</p>";

        assert_eq!(extract_paragraph_text(html), " 安い 早い 旨い");
    }

    #[test]
    fn test_page_without_paragraphs() {
        assert_eq!(extract_paragraph_text("<html><body><div>none</div></body></html>"), "");
    }

    #[tokio::test]
    async fn test_malformed_url_is_rejected_before_fetch() {
        let scraper = WebsiteScraper::new(Duration::from_secs(1)).unwrap();
        let err = scraper.fetch_paragraph_text("not a url").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidUrl(_)));
    }
}
