//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（QuestionRepository、CategoryRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    // Question commands
    CreateQuestion,
    DeleteQuestion,
    // Quiz commands
    PlayQuiz,
    // Handlers
    handlers::{
        CreateQuestionHandler, CreateQuestionResponse, DeleteQuestionHandler, PlayQuizHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    CategoryRecord, CategoryRepositoryPort, QuestionRecord, QuestionRepositoryPort,
    RepositoryError,
};

pub use queries::{
    // Category queries
    GetCategoryQuestions,
    ListCategories,
    // Question queries
    ListQuestions,
    SearchQuestions,
    // Handlers
    handlers::{
        CategoryQuestionsResponse, GetCategoryQuestionsHandler, ListCategoriesHandler,
        ListQuestionsHandler, QuestionPageResponse, SearchQuestionsHandler,
    },
};
