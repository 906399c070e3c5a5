//! Question HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{
    CategoryRecord, CreateQuestion, DeleteQuestion, ListQuestions, QuestionRecord,
    SearchQuestions,
};
use crate::domain::question::CategoryId;
use crate::infrastructure::http::deserializers::{deserialize_lenient_page, FlexibleI64};
use crate::infrastructure::http::dto::{category_map, ApiResponse, CategoryMap};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ValidJson, ValidPath, ValidQuery};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListQuestionsParams {
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    pub page: Option<i64>,
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsPageResponse {
    pub questions: Vec<QuestionRecord>,
    pub categories: CategoryMap,
    pub current_category: Option<CategoryRecord>,
    pub total_questions: usize,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: FlexibleI64,
    pub difficulty: FlexibleI64,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub message: &'static str,
    pub created: i64,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub message: &'static str,
    pub deleted: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// 分页获取题目
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<ListQuestionsParams>,
) -> Result<Json<ApiResponse<QuestionsPageResponse>>, ApiError> {
    let query = ListQuestions {
        page: params.page.unwrap_or(1),
        category: params.category_id.as_deref().and_then(CategoryId::parse),
    };

    let result = state.list_questions_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(QuestionsPageResponse {
        questions: result.questions,
        categories: category_map(result.categories),
        current_category: result.current_category,
        total_questions: result.total_questions,
    })))
}

/// 删除题目
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    // 非整数 id 等同于不存在
    ValidPath(question_id): ValidPath<i64>,
) -> Result<Json<ApiResponse<DeleteQuestionResponse>>, ApiError> {
    let deleted = state
        .delete_question_handler
        .handle(DeleteQuestion { question_id })
        .await?;

    Ok(Json(ApiResponse::success(DeleteQuestionResponse {
        message: "Question deleted",
        deleted,
    })))
}

/// 创建题目
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    ValidJson(request): ValidJson<CreateQuestionRequest>,
) -> Result<Json<ApiResponse<CreateQuestionResponse>>, ApiError> {
    let command = CreateQuestion {
        question: request.question,
        answer: request.answer,
        category: request.category.0,
        difficulty: request.difficulty.0,
    };

    let result = state.create_question_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(CreateQuestionResponse {
        message: "Question created",
        created: result.id,
        total_questions: result.total_questions,
    })))
}

/// 按题干搜索题目
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    ValidJson(request): ValidJson<SearchQuestionsRequest>,
) -> Result<Json<ApiResponse<QuestionListResponse>>, ApiError> {
    let questions = state
        .search_questions_handler
        .handle(SearchQuestions {
            search_term: request.search_term,
        })
        .await?;

    Ok(Json(ApiResponse::success(QuestionListResponse {
        total_questions: questions.len(),
        questions,
    })))
}
