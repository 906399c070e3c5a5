//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                               GET     健康检查
//! - /categories                         GET     列出所有分类
//! - /categories/{id}/questions          GET     获取分类下题目
//! - /questions                          GET     分页获取题目（?page=N&category_id=C）
//! - /questions                          POST    创建题目
//! - /questions/{id}                     DELETE  删除题目
//! - /search                             POST    按题干搜索
//! - /quizzes                            POST    抽取下一道题

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(category_routes())
        .merge(question_routes())
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(handlers::not_found)
}

/// Category 路由
fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(handlers::category_questions),
        )
}

/// Question 路由
fn question_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/:question_id", delete(handlers::delete_question))
        .route("/search", post(handlers::search_questions))
}
