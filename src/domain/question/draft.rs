//! Question Context - 新题目

use super::{CategoryId, Difficulty, QuestionError};

/// 待创建的题目
///
/// 不变量:
/// - question / answer 去除首尾空白后非空
/// - difficulty 在 1..=5 之间
/// - category 不校验是否存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl QuestionDraft {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Result<Self, QuestionError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }

        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }

        Ok(Self {
            question,
            answer,
            category: CategoryId::new(category),
            difficulty: Difficulty::new(difficulty)?,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
