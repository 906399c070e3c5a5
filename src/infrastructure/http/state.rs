//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateQuestionHandler, DeleteQuestionHandler, PlayQuizHandler,
    // Query handlers
    GetCategoryQuestionsHandler, ListCategoriesHandler, ListQuestionsHandler,
    SearchQuestionsHandler,
    // Ports
    CategoryRepositoryPort, QuestionRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_question_handler: CreateQuestionHandler,
    pub delete_question_handler: DeleteQuestionHandler,
    pub play_quiz_handler: PlayQuizHandler,

    // ========== Query Handlers ==========
    pub list_categories_handler: ListCategoriesHandler,
    pub get_category_questions_handler: GetCategoryQuestionsHandler,
    pub list_questions_handler: ListQuestionsHandler,
    pub search_questions_handler: SearchQuestionsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
        questions_per_page: usize,
    ) -> Self {
        Self {
            // Command handlers
            create_question_handler: CreateQuestionHandler::new(question_repo.clone()),
            delete_question_handler: DeleteQuestionHandler::new(question_repo.clone()),
            play_quiz_handler: PlayQuizHandler::new(question_repo.clone()),

            // Query handlers
            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            get_category_questions_handler: GetCategoryQuestionsHandler::new(
                question_repo.clone(),
                category_repo.clone(),
            ),
            list_questions_handler: ListQuestionsHandler::new(
                question_repo.clone(),
                category_repo,
                questions_per_page,
            ),
            search_questions_handler: SearchQuestionsHandler::new(question_repo),
        }
    }
}
