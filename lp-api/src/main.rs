use lp_api::logging::setup_logging;
use lp_api::routes::router;
use lp_app::{AppConfig, AppContext};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    setup_logging("info");

    let config = AppConfig::from_env().expect("Failed to load configuration");
    let app_context = AppContext::from_config(&config).expect("Failed to build application context");

    let app = router(app_context, &config.static_dir);

    tracing::info!("Listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
