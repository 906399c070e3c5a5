//! SQLite Category Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_sqlx_error;
use super::DbPool;
use crate::application::ports::{CategoryRecord, CategoryRepositoryPort, RepositoryError};
use crate::domain::question::CategoryId;

/// SQLite Category Repository
pub struct SqliteCategoryRepository {
    pool: DbPool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for CategoryRecord {
    fn from(row: CategoryRow) -> Self {
        CategoryRecord {
            id: row.id,
            kind: row.kind,
        }
    }
}

#[async_trait]
impl CategoryRepositoryPort for SqliteCategoryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as(r#"SELECT id, "type" FROM categories ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CategoryRecord::from).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<CategoryRecord>, RepositoryError> {
        let row: Option<CategoryRow> =
            sqlx::query_as(r#"SELECT id, "type" FROM categories WHERE id = ?"#)
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(CategoryRecord::from))
    }
}
