//! Category Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryRecord, CategoryRepositoryPort, QuestionRecord, QuestionRepositoryPort,
};
use crate::application::queries::{GetCategoryQuestions, ListCategories};
use crate::domain::question::CategoryId;

/// 分类题目响应
#[derive(Debug, Clone)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: Option<CategoryRecord>,
}

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(
        &self,
        _query: ListCategories,
    ) -> Result<Vec<CategoryRecord>, ApplicationError> {
        Ok(self.category_repo.find_all().await?)
    }
}

/// GetCategoryQuestions Handler
///
/// 不校验分类是否存在，未知分类返回空列表
pub struct GetCategoryQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl GetCategoryQuestionsHandler {
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    pub async fn handle(
        &self,
        query: GetCategoryQuestions,
    ) -> Result<CategoryQuestionsResponse, ApplicationError> {
        let Some(category) = CategoryId::parse(&query.category_id) else {
            return Ok(CategoryQuestionsResponse {
                questions: Vec::new(),
                total_questions: 0,
                current_category: None,
            });
        };

        let questions = self.question_repo.find_by_category(category).await?;
        let current_category = self.category_repo.find_by_id(category).await?;

        Ok(CategoryQuestionsResponse {
            total_questions: questions.len(),
            questions,
            current_category,
        })
    }
}
