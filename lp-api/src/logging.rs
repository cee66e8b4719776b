use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sets the logging (tracing) level from RUST_LOG, falling back to `default_filter`.
pub fn setup_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
