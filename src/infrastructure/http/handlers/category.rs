//! Category HTTP Handlers

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::application::{CategoryRecord, GetCategoryQuestions, ListCategories, QuestionRecord};
use crate::infrastructure::http::dto::{category_map, ApiResponse, CategoryMap};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ValidPath;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: Option<CategoryRecord>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取全部分类
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CategoriesResponse>>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;

    Ok(Json(ApiResponse::success(CategoriesResponse {
        categories: category_map(categories),
    })))
}

/// 获取某分类下的全部题目（未知分类返回空列表）
pub async fn category_questions(
    State(state): State<Arc<AppState>>,
    ValidPath(category_id): ValidPath<String>,
) -> Result<Json<ApiResponse<CategoryQuestionsResponse>>, ApiError> {
    let result = state
        .get_category_questions_handler
        .handle(GetCategoryQuestions { category_id })
        .await?;

    Ok(Json(ApiResponse::success(CategoryQuestionsResponse {
        questions: result.questions,
        total_questions: result.total_questions,
        current_category: result.current_category,
    })))
}
