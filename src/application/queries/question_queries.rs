//! Question Queries

use crate::domain::question::CategoryId;

/// 分页列出题目查询
#[derive(Debug, Clone)]
pub struct ListQuestions {
    /// 页码，从 1 开始
    pub page: i64,
    /// 可选的分类过滤
    pub category: Option<CategoryId>,
}

/// 搜索题目查询
#[derive(Debug, Clone)]
pub struct SearchQuestions {
    pub search_term: String,
}
