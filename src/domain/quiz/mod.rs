//! Quiz Context - 答题限界上下文
//!
//! 职责:
//! - 答题范围（全部分类 / 单一分类）
//! - 排除已答题目后的随机抽题

mod selection;

pub use selection::{pick_next_question, QuizScope};
