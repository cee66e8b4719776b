pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

mod app_context;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use app_context::AppContext;
pub use config::AppConfig;
