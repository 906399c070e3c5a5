//! Quiz Command Handlers

use std::sync::Arc;

use crate::application::commands::PlayQuiz;
use crate::application::error::ApplicationError;
use crate::application::ports::{QuestionRecord, QuestionRepositoryPort};
use crate::domain::quiz::pick_next_question;

/// PlayQuiz Handler - 在答题范围内抽取一道未答过的题目
pub struct PlayQuizHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl PlayQuizHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, command: PlayQuiz) -> Result<QuestionRecord, ApplicationError> {
        let candidates = self.question_repo.find_ids(command.scope.category()).await?;

        // ThreadRng 不能跨 await 持有
        let selected = pick_next_question(
            &candidates,
            &command.previous_questions,
            &mut rand::thread_rng(),
        )
        .ok_or(ApplicationError::NoQuestionsAvailable)?;

        let question = self
            .question_repo
            .find_by_id(selected)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Question", selected))?;

        tracing::debug!(
            question_id = question.id,
            scope = ?command.scope,
            previous = command.previous_questions.len(),
            candidates = candidates.len(),
            "Quiz question selected"
        );

        Ok(question)
    }
}
