//! Question Context - Value Objects

use serde::{Deserialize, Serialize};

use super::QuestionError;

/// 初始化数据库时写入的默认分类（按 id 1..=6 顺序）
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// 分类标识
///
/// 题目按值引用分类，不做存在性校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(i64);

impl CategoryId {
    /// 答题时表示"全部分类"的特殊值
    pub const ALL: i64 = 0;

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// 解析路径/查询参数中的分类标识，非数字返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty(i64);

impl Difficulty {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn new(value: i64) -> Result<Self, QuestionError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(QuestionError::InvalidDifficulty(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
