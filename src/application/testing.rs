//! 测试用内存仓储

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{
    CategoryRecord, CategoryRepositoryPort, QuestionRecord, QuestionRepositoryPort,
    RepositoryError,
};
use crate::domain::question::{CategoryId, QuestionDraft, DEFAULT_CATEGORIES};
use crate::domain::PageWindow;

/// 同时实现题目与分类端口的内存仓储
pub struct InMemoryStore {
    questions: Mutex<Vec<QuestionRecord>>,
    categories: Vec<CategoryRecord>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, kind)| CategoryRecord {
                id: i as i64 + 1,
                kind: kind.to_string(),
            })
            .collect();

        Self {
            questions: Mutex::new(Vec::new()),
            categories,
        }
    }
}

impl InMemoryStore {
    /// 生成 n 道题目，id 为 1..=n，分类按 1、2、3 轮流分配
    pub fn with_questions(n: i64) -> Self {
        let store = Self::default();
        {
            let mut questions = store.questions.lock().unwrap();
            for id in 1..=n {
                questions.push(QuestionRecord {
                    id,
                    question: format!("Question {}", id),
                    answer: format!("Answer {}", id),
                    category: (id - 1) % 3 + 1,
                    difficulty: 1,
                });
            }
        }
        store
    }

    pub fn question(&self, id: i64) -> Option<QuestionRecord> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    pub fn question_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    fn filtered(&self, category: Option<CategoryId>) -> Vec<QuestionRecord> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c.value()))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl QuestionRepositoryPort for InMemoryStore {
    async fn insert(&self, draft: &QuestionDraft) -> Result<i64, RepositoryError> {
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        questions.push(QuestionRecord {
            id,
            question: draft.question().to_string(),
            answer: draft.answer().to_string(),
            category: draft.category().value(),
            difficulty: draft.difficulty().value(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<QuestionRecord>, RepositoryError> {
        Ok(self.question(id))
    }

    async fn find_page(
        &self,
        category: Option<CategoryId>,
        window: PageWindow,
    ) -> Result<Vec<QuestionRecord>, RepositoryError> {
        Ok(self
            .filtered(category)
            .into_iter()
            .skip(window.offset())
            .take(window.limit())
            .collect())
    }

    async fn count(&self, category: Option<CategoryId>) -> Result<usize, RepositoryError> {
        Ok(self.filtered(category).len())
    }

    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<QuestionRecord>, RepositoryError> {
        Ok(self.filtered(Some(category)))
    }

    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let term = term.to_lowercase();
        Ok(self
            .filtered(None)
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .collect())
    }

    async fn find_ids(&self, category: Option<CategoryId>) -> Result<Vec<i64>, RepositoryError> {
        Ok(self.filtered(category).iter().map(|q| q.id).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }
}

#[async_trait]
impl CategoryRepositoryPort for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError> {
        Ok(self.categories.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<CategoryRecord>, RepositoryError> {
        Ok(self.categories.iter().find(|c| c.id == id.value()).cloned())
    }
}
