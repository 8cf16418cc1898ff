//! 页面路由

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::pages;
use crate::handlers::AppState;

/// 构建应用路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/generate", post(pages::generate))
        .route("/quiz", get(pages::quiz))
        .route("/quiz/answer", post(pages::answer))
        .route("/problems", get(pages::problems))
        .route("/reset", post(pages::reset))
        .fallback(pages::fallback)
}
