//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Question Context: 题目与分类
//! - Quiz Context: 答题抽题规则
//!
//! 以及共享的分页窗口计算

pub mod question;
pub mod quiz;

mod pagination;

pub use pagination::{PageWindow, DEFAULT_QUESTIONS_PER_PAGE};
