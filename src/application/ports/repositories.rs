//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::question::{CategoryId, QuestionDraft};
use crate::domain::PageWindow;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Question Repository
// ============================================================================

/// 题目实体（用于持久化）
///
/// 序列化格式即对外 JSON 格式: `{id, question, answer, category, difficulty}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Question Repository Port
#[async_trait]
pub trait QuestionRepositoryPort: Send + Sync {
    /// 插入新题目，返回自动分配的 id
    async fn insert(&self, draft: &QuestionDraft) -> Result<i64, RepositoryError>;

    /// 根据 ID 查找题目
    async fn find_by_id(&self, id: i64) -> Result<Option<QuestionRecord>, RepositoryError>;

    /// 按 id 顺序获取一页题目，可选按分类过滤
    async fn find_page(
        &self,
        category: Option<CategoryId>,
        window: PageWindow,
    ) -> Result<Vec<QuestionRecord>, RepositoryError>;

    /// 题目总数，可选按分类过滤
    async fn count(&self, category: Option<CategoryId>) -> Result<usize, RepositoryError>;

    /// 获取某分类下的全部题目
    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<QuestionRecord>, RepositoryError>;

    /// 题干大小写不敏感的子串搜索
    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>, RepositoryError>;

    /// 获取候选题目 id，None 表示全部分类
    async fn find_ids(&self, category: Option<CategoryId>) -> Result<Vec<i64>, RepositoryError>;

    /// 删除题目（单事务内先查后删），返回是否存在
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Category Repository
// ============================================================================

/// 分类实体（用于持久化）
///
/// 序列化格式: `{id, type}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 按 id 顺序获取所有分类
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError>;

    /// 根据 ID 查找分类
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<CategoryRecord>, RepositoryError>;
}
