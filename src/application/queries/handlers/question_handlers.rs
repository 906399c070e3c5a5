//! Question Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryRecord, CategoryRepositoryPort, QuestionRecord, QuestionRepositoryPort,
};
use crate::application::queries::{ListQuestions, SearchQuestions};
use crate::domain::PageWindow;

// ============================================================================
// Response DTOs
// ============================================================================

/// 分页题目响应
#[derive(Debug, Clone)]
pub struct QuestionPageResponse {
    pub questions: Vec<QuestionRecord>,
    pub categories: Vec<CategoryRecord>,
    pub current_category: Option<CategoryRecord>,
    pub total_questions: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListQuestions Handler
pub struct ListQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
    questions_per_page: usize,
}

impl ListQuestionsHandler {
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
        questions_per_page: usize,
    ) -> Self {
        Self {
            question_repo,
            category_repo,
            questions_per_page,
        }
    }

    /// 窗口为空（页码越界）时返回 NotFound
    pub async fn handle(
        &self,
        query: ListQuestions,
    ) -> Result<QuestionPageResponse, ApplicationError> {
        let window = PageWindow::new(query.page, self.questions_per_page)
            .ok_or_else(|| ApplicationError::not_found("Page", query.page))?;

        let questions = self.question_repo.find_page(query.category, window).await?;
        if questions.is_empty() {
            return Err(ApplicationError::not_found("Page", query.page));
        }

        let total_questions = self.question_repo.count(query.category).await?;
        let categories = self.category_repo.find_all().await?;

        // 过滤分类存在时作为当前分类，否则取第一个分类
        let current_category = query
            .category
            .and_then(|id| categories.iter().find(|c| c.id == id.value()))
            .or_else(|| categories.first())
            .cloned();

        Ok(QuestionPageResponse {
            questions,
            categories,
            current_category,
            total_questions,
        })
    }
}

/// SearchQuestions Handler
pub struct SearchQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl SearchQuestionsHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        query: SearchQuestions,
    ) -> Result<Vec<QuestionRecord>, ApplicationError> {
        let questions = self.question_repo.search(&query.search_term).await?;

        tracing::debug!(
            search_term = %query.search_term,
            matches = questions.len(),
            "Questions searched"
        );

        Ok(questions)
    }
}
