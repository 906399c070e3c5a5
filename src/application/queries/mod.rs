//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod category_queries;
mod question_queries;

pub mod handlers;

pub use category_queries::*;
pub use question_queries::*;
