use lp_errors::AppError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_STATIC_DIR: &str = "lp-api/static";

/// Process-wide settings, read once at startup and handed to whoever needs them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub model: String,
    pub scrape_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let openai_api_key = lookup("OPENAI_API_KEY").unwrap_or_default();
        if openai_api_key.is_empty() {
            tracing::warn!("OPENAI_API_KEY is not set, LLM calls will be rejected upstream");
        }

        let timeout_raw = get(
            "SCRAPE_TIMEOUT_SECS",
            &DEFAULT_SCRAPE_TIMEOUT_SECS.to_string(),
        );
        let scrape_timeout = timeout_raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| AppError::Config(format!("SCRAPE_TIMEOUT_SECS={}", timeout_raw)))?;

        let addr_raw = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| AppError::Config(format!("BIND_ADDR={}", addr_raw)))?;

        Ok(Self {
            openai_api_key,
            openai_api_url: get("OPENAI_API_URL", DEFAULT_API_URL),
            model: get("OPENAI_MODEL", DEFAULT_MODEL),
            scrape_timeout,
            bind_addr,
            static_dir: PathBuf::from(get("STATIC_DIR", DEFAULT_STATIC_DIR)),
        })
    }
}
