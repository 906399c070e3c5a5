//! Category Queries

/// 列出所有分类查询
#[derive(Debug, Clone)]
pub struct ListCategories;

/// 获取某分类下题目查询
///
/// category_id 为原始路径参数，非数字时结果为空
#[derive(Debug, Clone)]
pub struct GetCategoryQuestions {
    pub category_id: String,
}
