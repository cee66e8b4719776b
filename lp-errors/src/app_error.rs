use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("failed to fetch website: {0}")]
    ScrapingFailed(String),

    #[error("LLM request failed: {0}")]
    LlmError(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidUrl(_) => "URLの形式が正しくありません。",
            Self::ScrapingFailed(_) => "競合サイトにアクセスできませんでした。",
            Self::LlmError(_) => "AIの応答取得に失敗しました。時間をおいて再度お試しください。",
            Self::Timeout => "処理がタイムアウトしました。もう一度お試しください。",
            Self::Config(_) => "サーバーの設定に問題があります。",
            Self::Internal(_) => "サーバーで問題が発生しました。",
        }
    }
}

#[cfg(feature = "axum")]
mod axum_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
                AppError::ScrapingFailed(_) => StatusCode::BAD_GATEWAY,
                AppError::LlmError(_) => StatusCode::BAD_GATEWAY,
                AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.user_message().to_string();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
