//! Question Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateQuestion, DeleteQuestion};
use crate::application::error::ApplicationError;
use crate::application::ports::QuestionRepositoryPort;
use crate::domain::question::QuestionDraft;

// ============================================================================
// CreateQuestion
// ============================================================================

/// 创建题目响应
#[derive(Debug, Clone)]
pub struct CreateQuestionResponse {
    pub id: i64,
    pub total_questions: usize,
}

/// CreateQuestion Handler
pub struct CreateQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl CreateQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        command: CreateQuestion,
    ) -> Result<CreateQuestionResponse, ApplicationError> {
        let draft = QuestionDraft::new(
            command.question,
            command.answer,
            command.category,
            command.difficulty,
        )?;

        let id = self.question_repo.insert(&draft).await?;
        let total_questions = self.question_repo.count(None).await?;

        tracing::info!(
            question_id = id,
            category = %draft.category(),
            difficulty = draft.difficulty().value(),
            "Question created"
        );

        Ok(CreateQuestionResponse {
            id,
            total_questions,
        })
    }
}

// ============================================================================
// DeleteQuestion
// ============================================================================

/// DeleteQuestion Handler
pub struct DeleteQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl DeleteQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    /// 删除成功返回被删除的 id
    pub async fn handle(&self, command: DeleteQuestion) -> Result<i64, ApplicationError> {
        let question_id = command.question_id;

        if !self.question_repo.delete(question_id).await? {
            return Err(ApplicationError::not_found("Question", question_id));
        }

        tracing::info!(question_id = question_id, "Question deleted");

        Ok(question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    #[tokio::test]
    async fn test_create_reports_total_questions() {
        let store = Arc::new(InMemoryStore::with_questions(3));
        let handler = CreateQuestionHandler::new(store.clone());

        let result = handler
            .handle(CreateQuestion {
                question: "Q?".to_string(),
                answer: "A".to_string(),
                category: 5,
                difficulty: 2,
            })
            .await
            .unwrap();

        assert_eq!(result.total_questions, 4);
        assert!(store.question(result.id).is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_difficulty() {
        let store = Arc::new(InMemoryStore::default());
        let handler = CreateQuestionHandler::new(store.clone());

        let err = handler
            .handle(CreateQuestion {
                question: "Q?".to_string(),
                answer: "A".to_string(),
                category: 1,
                difficulty: 0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(store.question_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = Arc::new(InMemoryStore::with_questions(2));
        let handler = DeleteQuestionHandler::new(store.clone());

        assert_eq!(handler.handle(DeleteQuestion { question_id: 1 }).await.unwrap(), 1);
        let err = handler
            .handle(DeleteQuestion { question_id: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
