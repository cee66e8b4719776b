pub mod openai;
pub mod scraper;
