//! Question Context - 题目限界上下文
//!
//! 职责:
//! - 新题目的校验（题干、答案、难度）
//! - 分类标识与默认分类

mod draft;
mod errors;
mod value_objects;

pub use draft::QuestionDraft;
pub use errors::QuestionError;
pub use value_objects::{CategoryId, Difficulty, DEFAULT_CATEGORIES};
