use axum::{
    routing::{get, post},
    Router,
};
use lp_app::AppContext;
use std::path::Path;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod generate;
pub mod home;

pub fn router(ctx: AppContext, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/generate", post(generate::generate))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
