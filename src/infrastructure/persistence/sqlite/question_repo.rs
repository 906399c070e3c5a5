//! SQLite Question Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_sqlx_error;
use super::DbPool;
use crate::application::ports::{QuestionRecord, QuestionRepositoryPort, RepositoryError};
use crate::domain::question::{CategoryId, QuestionDraft};
use crate::domain::PageWindow;

/// SQLite Question Repository
pub struct SqliteQuestionRepository {
    pool: DbPool,
}

impl SqliteQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

impl From<QuestionRow> for QuestionRecord {
    fn from(row: QuestionRow) -> Self {
        QuestionRecord {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

#[async_trait]
impl QuestionRepositoryPort for SqliteQuestionRepository {
    async fn insert(&self, draft: &QuestionDraft) -> Result<i64, RepositoryError> {
        let id = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(draft.question())
        .bind(draft.answer())
        .bind(draft.category().value())
        .bind(draft.difficulty().value())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .last_insert_rowid();

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<QuestionRecord>, RepositoryError> {
        let row: Option<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(QuestionRecord::from))
    }

    async fn find_page(
        &self,
        category: Option<CategoryId>,
        window: PageWindow,
    ) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let category = category.map(|c| c.value());

        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty FROM questions
            WHERE (? IS NULL OR category = ?)
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(category)
        .bind(category)
        .bind(window.limit() as i64)
        .bind(window.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(QuestionRecord::from).collect())
    }

    async fn count(&self, category: Option<CategoryId>) -> Result<usize, RepositoryError> {
        let category = category.map(|c| c.value());

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE (? IS NULL OR category = ?)")
                .bind(category)
                .bind(category)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(count as usize)
    }

    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE category = ? ORDER BY id",
        )
        .bind(category.value())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(QuestionRecord::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>, RepositoryError> {
        // SQLite 的 LIKE 只折叠 ASCII 大小写，匹配在内存中按 Unicode 小写进行
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let needle = term.to_lowercase();
        Ok(rows
            .into_iter()
            .filter(|row| row.question.to_lowercase().contains(&needle))
            .map(QuestionRecord::from)
            .collect())
    }

    async fn find_ids(&self, category: Option<CategoryId>) -> Result<Vec<i64>, RepositoryError> {
        let category = category.map(|c| c.value());

        sqlx::query_scalar("SELECT id FROM questions WHERE (? IS NULL OR category = ?) ORDER BY id")
            .bind(category)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        // 事务在提前返回时随 drop 回滚
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if existing.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn setup() -> SqliteQuestionRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteQuestionRepository::new(pool)
    }

    async fn insert(repo: &SqliteQuestionRepository, question: &str, category: i64) -> i64 {
        let draft = QuestionDraft::new(question, "answer", category, 1).unwrap();
        repo.insert(&draft).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = setup().await;
        let id = insert(&repo, "What is Brad Pitts Character in Fight Club?", 5).await;

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.category, 5);
        assert_eq!(found.difficulty, 1);
        assert!(repo.find_by_id(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_page_and_count() {
        let repo = setup().await;
        for i in 0..12 {
            insert(&repo, &format!("Question {}", i), i % 2 + 1).await;
        }

        let second = repo
            .find_page(None, PageWindow::new(2, 10).unwrap())
            .await
            .unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(repo.count(None).await.unwrap(), 12);

        let filtered = repo
            .find_page(Some(CategoryId::new(1)), PageWindow::new(1, 10).unwrap())
            .await
            .unwrap();
        assert_eq!(filtered.len(), 6);
        assert_eq!(repo.count(Some(CategoryId::new(2))).await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_search_case_insensitive_substring() {
        let repo = setup().await;
        insert(&repo, "What is the capital of France?", 3).await;
        insert(&repo, "The Taj Mahal is in which country?", 3).await;
        insert(&repo, "WHO painted THE Mona Lisa?", 2).await;
        insert(&repo, "How many planets orbit our sun?", 1).await;

        assert_eq!(repo.search("the").await.unwrap().len(), 3);
        assert_eq!(repo.search("").await.unwrap().len(), 4);
        assert!(repo.search("answer").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let repo = setup().await;
        insert(&repo, "Is 100% of the moon visible?", 1).await;
        insert(&repo, "Plain question", 1).await;

        assert_eq!(repo.search("%").await.unwrap().len(), 1);
        assert!(repo.search("_lain").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_unicode_case() {
        let repo = setup().await;
        let id = insert(&repo, "Which École trained Monet?", 2).await;
        insert(&repo, "Which school trained Degas?", 2).await;

        let found = repo.search("école").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
        assert_eq!(repo.search("ÉCOLE").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_ids_by_scope() {
        let repo = setup().await;
        let a = insert(&repo, "A", 1).await;
        let b = insert(&repo, "B", 2).await;

        assert_eq!(repo.find_ids(None).await.unwrap(), vec![a, b]);
        assert_eq!(repo.find_ids(Some(CategoryId::new(2))).await.unwrap(), vec![b]);
        assert!(repo.find_ids(Some(CategoryId::new(9))).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_once() {
        let repo = setup().await;
        let id = insert(&repo, "Delete me", 1).await;

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert_eq!(repo.count(None).await.unwrap(), 0);
    }
}
