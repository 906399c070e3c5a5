//! Quiz Commands

use crate::domain::quiz::QuizScope;

/// 抽取下一道题命令
#[derive(Debug, Clone)]
pub struct PlayQuiz {
    pub scope: QuizScope,
    pub previous_questions: Vec<i64>,
}
