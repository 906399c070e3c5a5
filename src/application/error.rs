//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::question::QuestionError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 答题范围内已无可用题目
    #[error("No questions available for quiz")]
    NoQuestionsAvailable,

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 存储约束冲突
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound {
                resource_type: "Entity",
                id,
            },
            RepositoryError::ConstraintViolation(msg) => Self::ConstraintViolation(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<QuestionError> for ApplicationError {
    fn from(err: QuestionError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
