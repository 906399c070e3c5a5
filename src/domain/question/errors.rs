//! Question Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("题干不能为空")]
    EmptyQuestion,

    #[error("答案不能为空")]
    EmptyAnswer,

    #[error("无效的难度: {0}（应为 1..=5）")]
    InvalidDifficulty(i64),
}
