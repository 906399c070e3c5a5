//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod question_handlers;
mod quiz_handlers;

pub use question_handlers::*;
pub use quiz_handlers::*;
