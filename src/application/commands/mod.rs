//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod question_commands;
mod quiz_commands;

pub mod handlers;

pub use question_commands::*;
pub use quiz_commands::*;
