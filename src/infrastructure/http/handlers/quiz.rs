//! Quiz HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{PlayQuiz, QuestionRecord};
use crate::domain::quiz::QuizScope;
use crate::infrastructure::http::deserializers::FlexibleI64;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ValidJson;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<FlexibleI64>,
    pub quiz_category: QuizCategory,
}

/// 前端传入的分类对象，如 `{"type": "Science", "id": "1"}`，id 为 0 表示全部分类
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: FlexibleI64,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: QuestionRecord,
}

// ============================================================================
// Handlers
// ============================================================================

/// 抽取下一道未答过的题目
pub async fn play_quiz(
    State(state): State<Arc<AppState>>,
    ValidJson(request): ValidJson<QuizRequest>,
) -> Result<Json<ApiResponse<QuizResponse>>, ApiError> {
    let command = PlayQuiz {
        scope: QuizScope::from_category_id(request.quiz_category.id.0),
        previous_questions: request.previous_questions.into_iter().map(|id| id.0).collect(),
    };

    let question = state.play_quiz_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(QuizResponse { question })))
}
